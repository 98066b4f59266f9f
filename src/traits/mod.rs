/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

*/

mod byte_stream;
pub use byte_stream::*;

pub(crate) mod bit_stream;
pub use bit_stream::*;

mod count;
pub use count::*;

mod convert;
pub use convert::*;
