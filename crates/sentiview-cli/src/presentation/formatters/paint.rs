//! Console styling that switches itself off when stdout is not a terminal.

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::presentation::view_models::{RgbColor, Tone};

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

pub fn dim(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

pub fn accent(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.cyan()).to_string()
}

pub fn toned(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Positive => text.if_supports_color(Stdout, |t| t.green()).to_string(),
        Tone::Negative => text.if_supports_color(Stdout, |t| t.red()).to_string(),
        Tone::Neutral => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
    }
}

pub fn rgb(text: &str, color: RgbColor) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(color.r, color.g, color.b))
        .to_string()
}
