//! Pure UI helpers extracted from components for non-wasm testing.

/// Suffix appended to truncated text.
pub const ELLIPSIS: &str = "...";
/// Number of stars in a rating row.
pub const STAR_COUNT: u8 = 5;

/// Truncate `text` to at most `max_chars` characters, appending [`ELLIPSIS`]
/// when anything was cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    }
}

/// Filled/empty split for a five-star rating row. Always `0..=STAR_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    /// Round an average score to the nearest star and clamp it to the row.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self { filled: 0 };
        }
        let clamped = rate.round().clamp(0.0, f64::from(STAR_COUNT));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = clamped as u8;
        Self { filled }
    }

    /// Number of filled stars.
    #[must_use]
    pub const fn filled(self) -> u8 {
        self.filled
    }

    /// Number of outline stars completing the row.
    #[must_use]
    pub const fn empty(self) -> u8 {
        STAR_COUNT.saturating_sub(self.filled)
    }
}

/// Format a price with a dollar sign and exactly two decimals.
///
/// Cents are rounded half away from zero, so `10.625` shows as `$10.63`.
#[must_use]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() || price <= 0.0 {
        return "$0.00".to_string();
    }
    let cents = (price * 100.0).round();
    format!("${:.2}", cents / 100.0)
}

/// Capitalize the first character of a category label for tag display.
#[must_use]
pub fn category_label(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

/// Whether a click at `(x, y)` landed outside `rect`. Edges count as inside.
#[must_use]
pub fn is_outside_rect(rect: Rect, x: f64, y: f64) -> bool {
    let inside = x >= rect.left && x <= rect.right && y >= rect.top && y <= rect.bottom;
    !inside
}

/// Keyboard outcomes while the product modal is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    /// Dismiss the modal.
    Close,
}

/// Map a key press to a modal action; keys only matter while it is open.
#[must_use]
pub fn interpret_modal_key(key: &str, open: bool) -> Option<ModalKey> {
    match key {
        "Escape" | "Esc" if open => Some(ModalKey::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_limit() {
        assert_eq!(truncate("", 10), "");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("abcdefghijk", 10), "abcdefghij...");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
        assert_eq!(truncate("ééé", 3), "ééé");
    }

    #[test]
    fn star_rating_rounds_and_clamps() {
        assert_eq!(StarRating::from_rate(0.0).filled(), 0);
        assert_eq!(StarRating::from_rate(4.6).filled(), 5);
        assert_eq!(StarRating::from_rate(4.4).filled(), 4);
        assert_eq!(StarRating::from_rate(-1.0).filled(), 0);
        assert_eq!(StarRating::from_rate(6.0).filled(), 5);
        assert_eq!(StarRating::from_rate(f64::NAN).filled(), 0);
        assert_eq!(StarRating::from_rate(3.9).empty(), 1);
    }

    #[test]
    fn star_row_always_has_five_slots() {
        for rate in [-3.0, 0.0, 0.5, 2.49, 4.5, 5.0, 99.0, f64::INFINITY] {
            let stars = StarRating::from_rate(rate);
            assert_eq!(stars.filled() + stars.empty(), STAR_COUNT);
        }
    }

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(22.3), "$22.30");
        assert_eq!(format_price(7.0), "$7.00");
        assert_eq!(format_price(f64::INFINITY), "$0.00");
        assert_eq!(format_price(-4.0), "$0.00");
        assert_eq!(format_price(-0.0), "$0.00");
    }

    #[test]
    fn price_ties_round_up() {
        assert_eq!(format_price(10.625), "$10.63");
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(2.675), "$2.67");
    }

    #[test]
    fn category_labels_are_capitalized() {
        assert_eq!(category_label("electronics"), "Electronics");
        assert_eq!(category_label("men's clothing"), "Men's clothing");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn outside_detection_treats_edges_as_inside() {
        let rect = Rect {
            left: 10.0,
            top: 20.0,
            right: 110.0,
            bottom: 220.0,
        };
        assert!(!is_outside_rect(rect, 10.0, 20.0));
        assert!(!is_outside_rect(rect, 60.0, 100.0));
        assert!(is_outside_rect(rect, 9.9, 100.0));
        assert!(is_outside_rect(rect, 60.0, 220.1));
    }

    #[test]
    fn escape_only_closes_open_modal() {
        assert_eq!(interpret_modal_key("Escape", true), Some(ModalKey::Close));
        assert_eq!(interpret_modal_key("Escape", false), None);
        assert_eq!(interpret_modal_key("Enter", true), None);
    }
}
