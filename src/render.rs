//! Draw command generation
//!
//! Turns a session snapshot into a flat list of 2D primitives. The host
//! renderer replays the list in order; sprites are resolved through
//! [`crate::assets::SpriteSet`].

use crate::consts::*;
use crate::sim::{GameMode, GameObject, GameSession, SpriteId};
use crate::ui::{self, Button, Label, TextMeasure};

pub type Rgba = [u8; 4];

/// Colors for screen elements
pub mod colors {
    use super::Rgba;

    pub const MENU_SHADE: Rgba = [0, 0, 0, 180];
    pub const OVERLAY_SHADE: Rgba = [0, 0, 0, 150];
    pub const SEPARATOR: Rgba = [100, 100, 100, 255];
    pub const BUTTON: Rgba = [65, 105, 225, 255];
    pub const BUTTON_HOVER: Rgba = [100, 149, 237, 255];
    pub const BUTTON_BORDER: Rgba = [255, 255, 255, 100];
    pub const BUTTON_SHADOW: Rgba = [255, 255, 255, 50];
    pub const TEXT: Rgba = [255, 255, 255, 255];
    pub const TEXT_HOVER: Rgba = [0, 0, 0, 255];
}

/// One primitive for the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: SpriteId,
        x: f32,
        y: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stroke: f32,
        color: Rgba,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: f32,
        color: Rgba,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Rgba,
    },
}

impl From<Label> for DrawCommand {
    fn from(label: Label) -> Self {
        DrawCommand::Text {
            text: label.text,
            x: label.x,
            y: label.y,
            color: label.color,
        }
    }
}

fn full_screen(color: Rgba) -> DrawCommand {
    DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        color,
    }
}

fn object(obj: &GameObject) -> DrawCommand {
    DrawCommand::Sprite {
        sprite: obj.sprite,
        x: obj.pos.x,
        y: obj.pos.y,
    }
}

/// Fill, border, hover shadow and centered caption
pub fn button(button: &Button, measure: &dyn TextMeasure, out: &mut Vec<DrawCommand>) {
    let fill = if button.hovered {
        colors::BUTTON_HOVER
    } else {
        colors::BUTTON
    };
    out.push(DrawCommand::FillRect {
        x: button.x,
        y: button.y,
        width: button.width,
        height: button.height,
        color: fill,
    });
    out.push(DrawCommand::StrokeRect {
        x: button.x,
        y: button.y,
        width: button.width,
        height: button.height,
        stroke: 1.0,
        color: colors::BUTTON_BORDER,
    });
    if button.hovered {
        out.push(DrawCommand::FillRect {
            x: button.x + 2.0,
            y: button.y + 2.0,
            width: button.width,
            height: button.height,
            color: colors::BUTTON_SHADOW,
        });
    }

    let (x, y) = button.text_origin(measure);
    out.push(DrawCommand::Text {
        text: button.text().to_string(),
        x,
        y,
        color: if button.hovered {
            colors::TEXT_HOVER
        } else {
            colors::TEXT
        },
    });
}

/// Cars, then the player, then the HUD
fn game_layer(session: &GameSession, out: &mut Vec<DrawCommand>) {
    out.extend(session.cars().iter().map(object));
    out.push(object(session.player()));
    out.extend(ui::hud_labels(session).into_iter().map(DrawCommand::from));
}

fn buttons(session: &GameSession, measure: &dyn TextMeasure, out: &mut Vec<DrawCommand>) {
    for b in session.ui().buttons_for(session.mode()) {
        button(b, measure, out);
    }
}

/// Build the full frame for the session's current mode
pub fn build_frame(session: &GameSession, measure: &dyn TextMeasure) -> Vec<DrawCommand> {
    let mut out = vec![DrawCommand::Sprite {
        sprite: SpriteId::Background,
        x: 0.0,
        y: 0.0,
    }];

    match session.mode() {
        GameMode::Menu => {
            out.push(full_screen(colors::MENU_SHADE));
            let separator = ui::MENU_SEPARATOR_Y as f32;
            out.push(DrawCommand::Line {
                from: (SCREEN_WIDTH / 4.0, separator),
                to: (SCREEN_WIDTH * 3.0 / 4.0, separator),
                stroke: 2.0,
                color: colors::SEPARATOR,
            });
            out.extend(ui::menu_labels(measure).into_iter().map(DrawCommand::from));
            buttons(session, measure, &mut out);
        }
        GameMode::Playing => game_layer(session, &mut out),
        GameMode::Paused => {
            game_layer(session, &mut out);
            out.push(full_screen(colors::OVERLAY_SHADE));
            out.extend(ui::pause_labels(measure).into_iter().map(DrawCommand::from));
            buttons(session, measure, &mut out);
        }
        mode @ (GameMode::Win | GameMode::Lose(_)) => {
            game_layer(session, &mut out);
            out.push(full_screen(colors::OVERLAY_SHADE));
            out.extend(ui::result_labels(mode, measure).into_iter().map(DrawCommand::from));
            buttons(session, measure, &mut out);
        }
    }

    out
}
