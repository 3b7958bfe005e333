// SPDX-License-Identifier: Apache-2.0

//! Compile-time configuration validation
//!
//! This module contains compile-time checks to ensure that mutually exclusive
//! features are not enabled simultaneously.

// If none were selected that's an error
#[cfg(not(any(feature = "signed-zero", feature = "unsigned-zero")))]
compile_error!(
    "No negative zero behavior selected: choose one of 'signed-zero' or 'unsigned-zero'"
);

#[cfg(all(feature = "signed-zero", feature = "unsigned-zero"))]
compile_error!(
    "Cannot enable both 'signed-zero' and 'unsigned-zero' features simultaneously: choose one negative zero behavior"
);
