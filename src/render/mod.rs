// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Surface-independent rasterization of the diagram scene.

pub mod canvas;
pub mod raster;

pub use canvas::{Canvas, CanvasError};
pub use raster::{
    rasterize, CellRect, LineSpan, RasterOptions, ScenePaint, SceneRaster, UNITS_PER_COL,
    UNITS_PER_ROW,
};
