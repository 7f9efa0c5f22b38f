//! Menu buttons and screen text
//!
//! Button bounds are fixed. Text placement depends on rendered text width,
//! which only the renderer knows, so it is asked for through [`TextMeasure`].

use crate::consts::*;
use crate::sim::{GameMode, GameSession, LoseReason};

/// Width of rendered text in pixels, supplied by the font backend
pub trait TextMeasure {
    fn measure_text_width(&self, text: &str) -> i32;
}

/// Fixed-advance measurement for a monospace bitmap font
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    pub advance: i32,
}

impl Default for MonospaceMeasure {
    /// 7x13 bitmap face
    fn default() -> Self {
        Self { advance: 7 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }
}

/// Every clickable action in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Easy = 0,
    Medium,
    Hard,
    ExitGame,
    BackToMenu,
    PlayAgain,
    MainMenu,
}

impl ButtonId {
    pub const ALL: [ButtonId; 7] = [
        ButtonId::Easy,
        ButtonId::Medium,
        ButtonId::Hard,
        ButtonId::ExitGame,
        ButtonId::BackToMenu,
        ButtonId::PlayAgain,
        ButtonId::MainMenu,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ButtonId::Easy => "Easy",
            ButtonId::Medium => "Medium",
            ButtonId::Hard => "Hard",
            ButtonId::ExitGame => "Exit Game",
            ButtonId::BackToMenu => "Back to Menu",
            ButtonId::PlayAgain => "Play Again",
            ButtonId::MainMenu => "Main Menu",
        }
    }

    /// Buttons active in a mode. Playing has none.
    pub fn for_mode(mode: GameMode) -> &'static [ButtonId] {
        match mode {
            GameMode::Menu => &[
                ButtonId::Easy,
                ButtonId::Medium,
                ButtonId::Hard,
                ButtonId::ExitGame,
            ],
            GameMode::Paused => &[ButtonId::BackToMenu],
            GameMode::Win | GameMode::Lose(_) => &[ButtonId::PlayAgain, ButtonId::MainMenu],
            GameMode::Playing => &[],
        }
    }
}

/// A rectangular button with hover state
#[derive(Debug, Clone)]
pub struct Button {
    pub id: ButtonId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub hovered: bool,
}

impl Button {
    fn new(id: ButtonId, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            hovered: false,
        }
    }

    pub fn text(&self) -> &'static str {
        self.id.label()
    }

    /// Inclusive on all four edges
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Baseline position that centers `text` in the button
    pub fn text_origin(&self, measure: &dyn TextMeasure) -> (i32, i32) {
        let text_width = measure.measure_text_width(self.text());
        (
            self.x as i32 + self.width as i32 / 2 - text_width / 2,
            self.y as i32 + self.height as i32 / 2 + LINE_HEIGHT / 2 - 2,
        )
    }
}

/// Line height of the UI font
pub const LINE_HEIGHT: i32 = 13;

const DIFFICULTY_ROW_Y: f32 = 180.0;
const WIDE_BUTTON: f32 = 200.0;
const NARROW_BUTTON: f32 = 140.0;
const BUTTON_HEIGHT: f32 = 40.0;

/// All buttons and their hover state
#[derive(Debug, Clone)]
pub struct Ui {
    buttons: Vec<Button>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        let cx = SCREEN_WIDTH / 2.0;
        let cy = SCREEN_HEIGHT / 2.0;
        let buttons = vec![
            Button::new(ButtonId::Easy, cx - 220.0, DIFFICULTY_ROW_Y, NARROW_BUTTON, BUTTON_HEIGHT),
            Button::new(ButtonId::Medium, cx - 70.0, DIFFICULTY_ROW_Y, NARROW_BUTTON, BUTTON_HEIGHT),
            Button::new(ButtonId::Hard, cx + 80.0, DIFFICULTY_ROW_Y, NARROW_BUTTON, BUTTON_HEIGHT),
            Button::new(ButtonId::ExitGame, cx - 100.0, SCREEN_HEIGHT - 80.0, WIDE_BUTTON, BUTTON_HEIGHT),
            Button::new(ButtonId::BackToMenu, cx - 100.0, cy + 50.0, WIDE_BUTTON, BUTTON_HEIGHT),
            Button::new(ButtonId::PlayAgain, cx - 100.0, cy + 50.0, WIDE_BUTTON, BUTTON_HEIGHT),
            Button::new(ButtonId::MainMenu, cx - 100.0, cy + 100.0, WIDE_BUTTON, BUTTON_HEIGHT),
        ];
        Self { buttons }
    }

    pub fn button(&self, id: ButtonId) -> &Button {
        // Stored in `ButtonId::ALL` order
        &self.buttons[id as usize]
    }

    /// Buttons shown in `mode`, in layout order
    pub fn buttons_for(&self, mode: GameMode) -> impl Iterator<Item = &Button> {
        let ids = ButtonId::for_mode(mode);
        self.buttons.iter().filter(move |b| ids.contains(&b.id))
    }

    /// Refresh hover state for `mode`'s buttons from the pointer; other
    /// buttons are un-hovered. Returns the hovered buttons that were clicked.
    pub fn handle_pointer(
        &mut self,
        mode: GameMode,
        pointer: Option<(f32, f32)>,
        clicked: bool,
    ) -> Vec<ButtonId> {
        let active = ButtonId::for_mode(mode);
        let mut pressed = Vec::new();

        for button in &mut self.buttons {
            button.hovered = match pointer {
                Some((x, y)) => active.contains(&button.id) && button.contains(x, y),
                None => false,
            };
            if clicked && button.hovered {
                pressed.push(button.id);
            }
        }

        pressed
    }
}

/// A positioned line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: [u8; 4],
}

const WHITE: [u8; 4] = [255, 255, 255, 255];
const GOLD: [u8; 4] = [255, 215, 0, 255];
const LIGHT_GREY: [u8; 4] = [200, 200, 200, 255];
const DIM_GREY: [u8; 4] = [150, 150, 150, 255];

pub const TITLE: &str = "ROAD ADVENTURE";
pub const VERSION: &str = "v1.0";
pub const CONTROLS: [&str; 3] = [
    "W/A/S/D or Arrow Keys - Movement",
    "Space - Pause/Resume",
    "ESC - Back to Menu",
];

/// Y of the separator line under the difficulty row
pub const MENU_SEPARATOR_Y: i32 = DIFFICULTY_ROW_Y as i32 + 70;

fn centered(text: impl Into<String>, y: i32, color: [u8; 4], measure: &dyn TextMeasure) -> Label {
    let text = text.into();
    let width = measure.measure_text_width(&text);
    Label {
        x: SCREEN_WIDTH as i32 / 2 - width / 2,
        y,
        color,
        text,
    }
}

/// Menu screen text
pub fn menu_labels(measure: &dyn TextMeasure) -> Vec<Label> {
    let mut labels = vec![
        centered(TITLE, 80, GOLD, measure),
        centered("SELECT DIFFICULTY", 140, WHITE, measure),
        centered("CONTROLS", MENU_SEPARATOR_Y + 30, WHITE, measure),
    ];
    for (i, line) in CONTROLS.iter().enumerate() {
        labels.push(centered(*line, MENU_SEPARATOR_Y + 60 + i as i32 * 20, LIGHT_GREY, measure));
    }
    let version_width = measure.measure_text_width(VERSION);
    labels.push(Label {
        text: VERSION.to_string(),
        x: SCREEN_WIDTH as i32 - version_width - 10,
        y: SCREEN_HEIGHT as i32 - 20,
        color: DIM_GREY,
    });
    labels
}

/// HUD in the text area: remaining time and difficulty
pub fn hud_labels(session: &GameSession) -> Vec<Label> {
    vec![
        Label {
            text: format!("Time: {}", session.remaining_time()),
            x: 10,
            y: 10,
            color: WHITE,
        },
        Label {
            text: format!("Level: {}", session.difficulty().as_str()),
            x: 10,
            y: 30,
            color: WHITE,
        },
    ]
}

pub fn pause_labels(measure: &dyn TextMeasure) -> Vec<Label> {
    vec![centered("PAUSE", SCREEN_HEIGHT as i32 / 2 - 50, WHITE, measure)]
}

/// Headline and reason for a finished round. Empty outside Win/Lose.
pub fn result_labels(mode: GameMode, measure: &dyn TextMeasure) -> Vec<Label> {
    let (headline, reason) = match mode {
        GameMode::Win => ("VICTORY!", "You made it!"),
        GameMode::Lose(LoseReason::TimeUp) => ("GAME OVER!", "Time's up!"),
        GameMode::Lose(LoseReason::Hit) => ("GAME OVER!", "You got hit!"),
        _ => return Vec::new(),
    };
    let cy = SCREEN_HEIGHT as i32 / 2;
    vec![
        centered(headline, cy - 80, WHITE, measure),
        centered(reason, cy - 50, WHITE, measure),
    ]
}
