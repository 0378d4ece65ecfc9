//! Rendering: draws the stage to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the stage and configuration and produces
//! pixels; it does not mutate any table state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::table::Table::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::config::TableConfig;
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::entity::{CardEntity, Stage};

/// Fill for a card whose sheet image has not decoded yet.
const PLACEHOLDER_FILL: &str = "#f4f1ea";

/// Draw the full scene: background, then every visible card bottom first.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    stage: &Stage,
    sheet: Option<&HtmlImageElement>,
    config: &TableConfig,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.set_fill_style_str(&config.background);
    ctx.fill_rect(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT);

    for (_, entity) in stage.iter() {
        if entity.visible {
            draw_card(ctx, entity, sheet, config)?;
        }
    }
    Ok(())
}

fn draw_card(
    ctx: &CanvasRenderingContext2d,
    entity: &CardEntity,
    sheet: Option<&HtmlImageElement>,
    config: &TableConfig,
) -> Result<(), JsValue> {
    ctx.save();
    translate_and_rotate(ctx, entity)?;

    let w = entity.width();
    let h = entity.height();
    let (x, y) = (-w / 2.0, -h / 2.0);

    match sheet {
        Some(sheet) => {
            let frame = entity.texture.frame();
            ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                sheet, frame.x, frame.y, frame.w, frame.h, x, y, w, h,
            )?;
        }
        None => {
            ctx.set_fill_style_str(PLACEHOLDER_FILL);
            ctx.fill_rect(x, y, w, h);
        }
    }

    if entity.is_outlined() {
        ctx.set_stroke_style_str(&config.outline_color);
        ctx.set_line_width(config.outline_width);
        ctx.stroke_rect(x, y, w, h);
    }

    ctx.restore();
    Ok(())
}

/// Move the origin to the card's center and apply its rotation.
fn translate_and_rotate(ctx: &CanvasRenderingContext2d, entity: &CardEntity) -> Result<(), JsValue> {
    ctx.translate(entity.x, entity.y)?;
    ctx.rotate(entity.rotation)?;
    Ok(())
}
