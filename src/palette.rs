use derive_more::{Deref, From};
use image::Rgb;
use rand::{seq::SliceRandom, Rng};

use crate::error::{Error, Result};

pub type Color = Rgb<u8>;

/// The palette the generator falls back to.
/// The repeated entry makes the darker gray twice as likely
pub const DEFAULT: [&str; 3] = ["#292929", "#292929", "#3F2929"];
pub const COMBO_1: [&str; 5] = ["#b6359c", "#ef0a6a", "#0000FF", "#ffffff", "#282828"];
pub const COMBO_2: [&str; 3] = ["#8f3be6", "#292929", "#ececec"];

/// An ordered list of candidate tile colors.
/// Duplicates are kept so they weight the random selection
#[derive(Deref, From, Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette(pub Vec<Color>);

impl Palette {
    pub fn from_hex<S: AsRef<str>>(literals: &[S]) -> Result<Self> {
        let colors = literals
            .iter()
            .map(|lit| parse_hex(lit.as_ref()))
            .collect::<Result<Vec<Color>>>()?;
        return Ok(Palette(colors));
    }

    /// picks a color uniformly at random, with replacement
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Color> {
        return self
            .0
            .choose(rng)
            .copied()
            .ok_or_else(|| Error::InvalidConfiguration("palette is empty".to_string()));
    }
}

/// Parses `#rrggbb` or the `#rgb` shorthand
pub fn parse_hex(literal: &str) -> Result<Color> {
    let invalid = || Error::InvalidConfiguration(format!("bad color literal {literal:?}"));

    let digits = literal.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    return match digits.len() {
        6 => Ok(Rgb([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ])),
        // each nibble is doubled: #abc == #aabbcc
        3 => {
            let [r, g, b] = [0, 1, 2].map(|i| channel(&digits[i..i + 1]));
            Ok(Rgb([r? * 17, g? * 17, b? * 17]))
        }
        _ => Err(invalid()),
    };
}
