use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус места. `Booked` выставляется один раз при построении сетки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
}

/// Цветовая метка категории мест.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Purple,
    Yellow,
    Green,
    Red,
    Indigo,
    Pink,
    Gray,
}

/// Палитра в порядке назначения категориям.
pub const PALETTE: [ColorTag; 8] = [
    ColorTag::Blue,
    ColorTag::Purple,
    ColorTag::Yellow,
    ColorTag::Green,
    ColorTag::Red,
    ColorTag::Indigo,
    ColorTag::Pink,
    ColorTag::Gray,
];

impl ColorTag {
    /// Цвет для правила с позицией `index`; при нехватке цветов идём по кругу.
    pub fn for_rule(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Red => "red",
            ColorTag::Indigo => "indigo",
            ColorTag::Pink => "pink",
            ColorTag::Gray => "gray",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Результат классификации ряда: категория, цена, цвет и отображаемое имя.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatClass {
    pub category: String,
    pub name: String,
    pub price: f64,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub row: usize,
    pub column: usize,
    pub category: String,
    pub name: String,
    pub price: f64,
    pub color: ColorTag,
    pub status: SeatStatus,
    pub selected: bool,
}

impl Seat {
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    pub fn is_booked(&self) -> bool {
        self.status == SeatStatus::Booked
    }

    /// Номер места в ряду, как его видит зритель (с единицы).
    pub fn number(&self) -> usize {
        self.column + 1
    }
}

/// Буквенная метка ряда: A..Z, затем AA, AB, ... ZZ, AAA.
pub fn row_label(row: usize) -> String {
    let mut n = row + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    // только ASCII A-Z
    String::from_utf8(letters).unwrap_or_default()
}

/// Идентификатор места: метка ряда + номер места с единицы ("A1", "AB12").
pub fn seat_id(row: usize, column: usize) -> String {
    format!("{}{}", row_label(row), column + 1)
}

/// Обратное к `seat_id`: возвращает (row, column) с нуля.
pub fn parse_seat_id(id: &str) -> Option<(usize, usize)> {
    let split = id.find(|c: char| !c.is_ascii_uppercase())?;
    let (letters, digits) = id.split_at(split);
    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') {
        return None;
    }

    let mut row: usize = 0;
    for b in letters.bytes() {
        row = row.checked_mul(26)?.checked_add((b - b'A' + 1) as usize)?;
    }
    let number: usize = digits.parse().ok()?;

    Some((row - 1, number - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_labels_extend_past_z() {
        assert_eq!(row_label(0), "A");
        assert_eq!(row_label(25), "Z");
        assert_eq!(row_label(26), "AA");
        assert_eq!(row_label(27), "AB");
        assert_eq!(row_label(701), "ZZ");
        assert_eq!(row_label(702), "AAA");
    }

    #[test]
    fn test_seat_id_format() {
        assert_eq!(seat_id(0, 0), "A1");
        assert_eq!(seat_id(2, 11), "C12");
        assert_eq!(seat_id(27, 4), "AB5");
    }

    #[test]
    fn test_parse_seat_id() {
        assert_eq!(parse_seat_id("A1"), Some((0, 0)));
        assert_eq!(parse_seat_id("C12"), Some((2, 11)));
        assert_eq!(parse_seat_id("AB5"), Some((27, 4)));

        assert_eq!(parse_seat_id(""), None);
        assert_eq!(parse_seat_id("A"), None);
        assert_eq!(parse_seat_id("12"), None);
        assert_eq!(parse_seat_id("a1"), None);
        assert_eq!(parse_seat_id("A0"), None);
        assert_eq!(parse_seat_id("A01"), None);
        assert_eq!(parse_seat_id("A1B"), None);
    }

    #[test]
    fn test_parse_inverts_seat_id() {
        for row in [0, 1, 25, 26, 51, 701, 702] {
            for column in [0, 9, 99] {
                assert_eq!(parse_seat_id(&seat_id(row, column)), Some((row, column)));
            }
        }
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(ColorTag::for_rule(0), ColorTag::Blue);
        assert_eq!(ColorTag::for_rule(7), ColorTag::Gray);
        assert_eq!(ColorTag::for_rule(8), ColorTag::Blue);
        assert_eq!(ColorTag::for_rule(10).to_string(), "yellow");
    }
}
