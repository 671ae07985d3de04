// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/script.rs
//
// Text gesture scripts for headless cropping.
//
// Steps are separated by `;` or newlines:
//
//   down 100,50; move 350,150; up
//   # comments are skipped
//   escape | reset | grid
//
// `up` and `cancel` reuse the last pointer position unless given one.

use crate::app::message::AppMessage;
use crate::app::surface::{PointerEvent, PointerPhase};
use crate::domain::Point;
use crate::error::{CropError, Result};

pub fn parse(script: &str) -> Result<Vec<AppMessage>> {
    let mut messages = Vec::new();
    let mut last = Point::default();

    let steps = script
        .split(['\n', ';'])
        .map(str::trim)
        .enumerate()
        .filter(|(_, step)| !step.is_empty() && !step.starts_with('#'));

    for (index, step) in steps {
        let line = index + 1;
        let (command, rest) = step
            .split_once(char::is_whitespace)
            .map_or((step, ""), |(c, r)| (c, r.trim()));

        let message = match command.to_ascii_lowercase().as_str() {
            "down" | "move" => {
                let phase = if command.eq_ignore_ascii_case("down") {
                    PointerPhase::Down
                } else {
                    PointerPhase::Move
                };
                last = parse_point(rest, line)?;
                pointer(phase, last)
            }
            "up" | "cancel" => {
                let phase = if command.eq_ignore_ascii_case("up") {
                    PointerPhase::Up
                } else {
                    PointerPhase::Cancel
                };
                if !rest.is_empty() {
                    last = parse_point(rest, line)?;
                }
                pointer(phase, last)
            }
            "escape" => AppMessage::CancelCrop,
            "reset" => AppMessage::ResetSelection,
            "grid" => AppMessage::ToggleGrid,
            other => {
                return Err(CropError::Script {
                    line,
                    message: format!("unknown command `{other}`"),
                });
            }
        };
        messages.push(message);
    }

    Ok(messages)
}

fn pointer(phase: PointerPhase, at: Point) -> AppMessage {
    AppMessage::Pointer(PointerEvent::mouse(phase, at.x, at.y))
}

fn parse_point(text: &str, line: usize) -> Result<Point> {
    let err = |message: String| CropError::Script { line, message };

    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| err(format!("expected `X,Y`, got `{text}`")))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| err(format!("invalid coordinate `{}`", v.trim())))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_gesture() {
        let messages = parse("down 100,50; move 350, 150\nup").unwrap();
        assert_eq!(
            messages,
            vec![
                pointer(PointerPhase::Down, Point::new(100.0, 50.0)),
                pointer(PointerPhase::Move, Point::new(350.0, 150.0)),
                pointer(PointerPhase::Up, Point::new(350.0, 150.0)),
            ]
        );
    }

    #[test]
    fn skips_blank_and_comment_steps() {
        let messages = parse("# setup\n\nreset;;grid;ESCAPE").unwrap();
        assert_eq!(
            messages,
            vec![
                AppMessage::ResetSelection,
                AppMessage::ToggleGrid,
                AppMessage::CancelCrop
            ]
        );
    }

    #[test]
    fn cancel_with_explicit_point() {
        let messages = parse("down 1,2; cancel 7,8").unwrap();
        assert_eq!(messages[1], pointer(PointerPhase::Cancel, Point::new(7.0, 8.0)));
    }

    #[test]
    fn reports_step_number() {
        let err = parse("down 1,2; jump 3,4").unwrap_err();
        assert_eq!(
            err,
            CropError::Script {
                line: 2,
                message: "unknown command `jump`".into()
            }
        );
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(matches!(parse("down 1"), Err(CropError::Script { line: 1, .. })));
        assert!(matches!(parse("move a,2"), Err(CropError::Script { .. })));
        assert!(matches!(parse("down inf,2"), Err(CropError::Script { .. })));
    }
}
