//! Packed RGB [`Color`] and the [`db32`] palette table.

use std::fmt;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Components as normalised floats in `[0, 1)`, in steps of 1/256.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r() as f32 / 256.0,
            self.g() as f32 / 256.0,
            self.b() as f32 / 256.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// The 32-colour Dawnbringer palette.
pub mod db32 {
    use super::Color;

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const VALHALLA: Color = Color::from_rgb(34, 32, 52);
    pub const LOULOU: Color = Color::from_rgb(69, 40, 60);
    pub const OILED_CEDAR: Color = Color::from_rgb(102, 57, 49);
    pub const ROPE: Color = Color::from_rgb(143, 86, 59);
    pub const TAHITI_GOLD: Color = Color::from_rgb(223, 113, 38);
    pub const TWINE: Color = Color::from_rgb(217, 160, 102);
    pub const PANCHO: Color = Color::from_rgb(238, 195, 154);
    pub const GOLDEN_FIZZ: Color = Color::from_rgb(251, 242, 54);
    pub const ATLANTIS: Color = Color::from_rgb(153, 229, 80);
    pub const CHRISTI: Color = Color::from_rgb(106, 190, 48);
    pub const ELF_GREEN: Color = Color::from_rgb(55, 148, 110);
    pub const DELL: Color = Color::from_rgb(75, 105, 47);
    pub const VERDIGRIS: Color = Color::from_rgb(82, 75, 36);
    pub const OPAL: Color = Color::from_rgb(50, 60, 57);
    pub const DEEP_KOAMARU: Color = Color::from_rgb(63, 63, 116);
    pub const VENICE_BLUE: Color = Color::from_rgb(48, 96, 130);
    pub const ROYAL_BLUE: Color = Color::from_rgb(91, 110, 225);
    pub const CORNFLOWER: Color = Color::from_rgb(99, 155, 255);
    pub const VIKING: Color = Color::from_rgb(95, 205, 228);
    pub const LIGHT_STEEL_BLUE: Color = Color::from_rgb(203, 219, 252);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const HEATHER: Color = Color::from_rgb(155, 173, 183);
    pub const TOPAZ: Color = Color::from_rgb(132, 126, 135);
    pub const DIM_GRAY: Color = Color::from_rgb(105, 106, 106);
    pub const SMOKEY_ASH: Color = Color::from_rgb(89, 86, 82);
    pub const CLAIRVOYANT: Color = Color::from_rgb(118, 66, 138);
    pub const BROWN: Color = Color::from_rgb(172, 50, 50);
    pub const MANDY: Color = Color::from_rgb(217, 87, 99);
    pub const PLUM: Color = Color::from_rgb(215, 123, 186);
    pub const RAIN_FOREST: Color = Color::from_rgb(143, 151, 74);
    pub const STINGER: Color = Color::from_rgb(138, 111, 48);

    /// Every palette entry, in palette order.
    pub const ALL: [(&str, Color); 32] = [
        ("Black", BLACK),
        ("Valhalla", VALHALLA),
        ("Loulou", LOULOU),
        ("OiledCedar", OILED_CEDAR),
        ("Rope", ROPE),
        ("TahitiGold", TAHITI_GOLD),
        ("Twine", TWINE),
        ("Pancho", PANCHO),
        ("GoldenFizz", GOLDEN_FIZZ),
        ("Atlantis", ATLANTIS),
        ("Christi", CHRISTI),
        ("ElfGreen", ELF_GREEN),
        ("Dell", DELL),
        ("Verdigris", VERDIGRIS),
        ("Opal", OPAL),
        ("DeepKoamaru", DEEP_KOAMARU),
        ("VeniceBlue", VENICE_BLUE),
        ("RoyalBlue", ROYAL_BLUE),
        ("Cornflower", CORNFLOWER),
        ("Viking", VIKING),
        ("LightSteelBlue", LIGHT_STEEL_BLUE),
        ("White", WHITE),
        ("Heather", HEATHER),
        ("Topaz", TOPAZ),
        ("DimGray", DIM_GRAY),
        ("SmokeyAsh", SMOKEY_ASH),
        ("Clairvoyant", CLAIRVOYANT),
        ("Brown", BROWN),
        ("Mandy", MANDY),
        ("Plum", PLUM),
        ("RainForest", RAIN_FOREST),
        ("Stinger", STINGER),
    ];

    /// Look up a palette colour by its name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Color> {
        ALL.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, c)| c)
    }
}
