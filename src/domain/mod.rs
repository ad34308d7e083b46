// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and business rules. It has no
//! dependencies on external crates (except `std`) to keep it testable.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notifications`]: Toast value objects ([`DismissDelay`](notifications::DismissDelay),
//!   [`MaxVisible`](notifications::MaxVisible))

pub mod diagnostics;
pub mod notifications;
