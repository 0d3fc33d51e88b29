/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

pub(crate) mod elementwise;
pub(crate) mod product;
