// ============================================================================
// Feuille de style : classes de la page → styles ratatui
// ============================================================================
// La page ne connaît que des noms de classes ("stock-up", "fade-out", ...).
// Ce module décide à quoi elles ressemblent dans le terminal.
//
// Fondu : un terminal n'a pas d'opacité, on la simule avec une rampe de
// gris vers la couleur réelle.
// ============================================================================

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};

use crate::ticker::{FadeState, Phase};

/// Style d'une classe de contenu
pub fn class_style(class: &str) -> Style {
    match class {
        "stock-up" => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        "stock-down" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        "stock-name" => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        _ => Style::default(),
    }
}

/// Opacité simulée (0.0 à 1.0) de la zone du ticker
///
/// - fade-out : descend linéairement pendant la phase FadingOut, puis 0.0
/// - fade-in  : monte linéairement pendant la phase FadingIn, puis 1.0
pub fn opacity(fade: Option<FadeState>, phase: Phase, now: Duration) -> f32 {
    match fade {
        None => 1.0,
        Some(FadeState::FadeOut) => match phase {
            Phase::FadingOut {
                started_at,
                swap_at,
            } => 1.0 - progress(started_at, swap_at, now),
            _ => 0.0,
        },
        Some(FadeState::FadeIn) => match phase {
            Phase::FadingIn {
                swapped_at,
                settled_at,
            } => progress(swapped_at, settled_at, now),
            _ => 1.0,
        },
    }
}

/// Avancement (0.0 à 1.0) de `now` dans l'intervalle [from, to]
fn progress(from: Duration, to: Duration, now: Duration) -> f32 {
    if to <= from {
        return 1.0;
    }
    let elapsed = now.saturating_sub(from).as_secs_f32();
    let total = (to - from).as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Applique l'opacité à un style
///
/// En dessous de 1/3 : gris foncé, en dessous de 2/3 : gris, sinon le style
/// d'origine.
pub fn faded(style: Style, opacity: f32) -> Style {
    if opacity < 1.0 / 3.0 {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if opacity < 2.0 / 3.0 {
        Style::default().fg(Color::Gray)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_class_style() {
        assert_eq!(class_style("stock-up").fg, Some(Color::Green));
        assert_eq!(class_style("stock-down").fg, Some(Color::Red));
        assert_eq!(class_style("unknown"), Style::default());
    }

    #[test]
    fn test_opacity_ramp() {
        let phase = Phase::FadingIn {
            swapped_at: ms(500),
            settled_at: ms(1000),
        };

        assert_eq!(opacity(Some(FadeState::FadeOut), Phase::Idle, ms(0)), 0.0);
        assert_eq!(opacity(Some(FadeState::FadeIn), phase, ms(500)), 0.0);
        assert_eq!(opacity(Some(FadeState::FadeIn), phase, ms(750)), 0.5);
        assert_eq!(opacity(Some(FadeState::FadeIn), phase, ms(2000)), 1.0);
        assert_eq!(opacity(Some(FadeState::FadeIn), Phase::Idle, ms(2000)), 1.0);
        assert_eq!(opacity(None, Phase::Idle, ms(0)), 1.0);
    }

    #[test]
    fn test_fade_out_ramps_down() {
        let phase = Phase::FadingOut {
            started_at: ms(5000),
            swap_at: ms(5500),
        };

        assert_eq!(opacity(Some(FadeState::FadeOut), phase, ms(5000)), 1.0);
        assert_eq!(opacity(Some(FadeState::FadeOut), phase, ms(5250)), 0.5);
        assert_eq!(opacity(Some(FadeState::FadeOut), phase, ms(5500)), 0.0);
        assert_eq!(opacity(Some(FadeState::FadeOut), phase, ms(9000)), 0.0);
    }

    #[test]
    fn test_zero_length_fade_in() {
        let phase = Phase::FadingIn {
            swapped_at: ms(500),
            settled_at: ms(500),
        };
        assert_eq!(opacity(Some(FadeState::FadeIn), phase, ms(500)), 1.0);
    }

    #[test]
    fn test_faded() {
        let style = class_style("stock-up");
        assert_eq!(faded(style, 1.0), style);
        assert_eq!(faded(style, 0.0).fg, Some(Color::DarkGray));
        assert_eq!(faded(style, 0.5).fg, Some(Color::Gray));
    }
}
