// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use alnutils::errors::AlnUtilsError;

fn main() -> Result<(), AlnUtilsError> {
    alnutils::runner::run_compare()
}
