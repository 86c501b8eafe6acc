//! CSS named colors (CSS Color Module Level 4), without the spelling
//! duplicates (`aqua`, `fuchsia`, `grey` variants).

use lazy_static::lazy_static;
use rgb::RGB8;

/// A color of the naming table.
pub(crate) struct NameEntry {
    pub(crate) name: &'static str,
    pub(crate) rgb: RGB8,
}

lazy_static! {
  pub(crate) static ref CSS_COLORS: Vec<NameEntry> = {
    [
      ("Alice Blue", RGB8 { r: 240, g: 248, b: 255 }),
      ("Antique White", RGB8 { r: 250, g: 235, b: 215 }),
      ("Aquamarine", RGB8 { r: 127, g: 255, b: 212 }),
      ("Azure", RGB8 { r: 240, g: 255, b: 255 }),
      ("Beige", RGB8 { r: 245, g: 245, b: 220 }),
      ("Bisque", RGB8 { r: 255, g: 228, b: 196 }),
      ("Black", RGB8 { r: 0, g: 0, b: 0 }),
      ("Blanched Almond", RGB8 { r: 255, g: 235, b: 205 }),
      ("Blue", RGB8 { r: 0, g: 0, b: 255 }),
      ("Blue Violet", RGB8 { r: 138, g: 43, b: 226 }),
      ("Brown", RGB8 { r: 165, g: 42, b: 42 }),
      ("Burly Wood", RGB8 { r: 222, g: 184, b: 135 }),
      ("Cadet Blue", RGB8 { r: 95, g: 158, b: 160 }),
      ("Chartreuse", RGB8 { r: 127, g: 255, b: 0 }),
      ("Chocolate", RGB8 { r: 210, g: 105, b: 30 }),
      ("Coral", RGB8 { r: 255, g: 127, b: 80 }),
      ("Cornflower Blue", RGB8 { r: 100, g: 149, b: 237 }),
      ("Cornsilk", RGB8 { r: 255, g: 248, b: 220 }),
      ("Crimson", RGB8 { r: 220, g: 20, b: 60 }),
      ("Cyan", RGB8 { r: 0, g: 255, b: 255 }),
      ("Dark Blue", RGB8 { r: 0, g: 0, b: 139 }),
      ("Dark Cyan", RGB8 { r: 0, g: 139, b: 139 }),
      ("Dark Goldenrod", RGB8 { r: 184, g: 134, b: 11 }),
      ("Dark Gray", RGB8 { r: 169, g: 169, b: 169 }),
      ("Dark Green", RGB8 { r: 0, g: 100, b: 0 }),
      ("Dark Khaki", RGB8 { r: 189, g: 183, b: 107 }),
      ("Dark Magenta", RGB8 { r: 139, g: 0, b: 139 }),
      ("Dark Olive Green", RGB8 { r: 85, g: 107, b: 47 }),
      ("Dark Orange", RGB8 { r: 255, g: 140, b: 0 }),
      ("Dark Orchid", RGB8 { r: 153, g: 50, b: 204 }),
      ("Dark Red", RGB8 { r: 139, g: 0, b: 0 }),
      ("Dark Salmon", RGB8 { r: 233, g: 150, b: 122 }),
      ("Dark Sea Green", RGB8 { r: 143, g: 188, b: 143 }),
      ("Dark Slate Blue", RGB8 { r: 72, g: 61, b: 139 }),
      ("Dark Slate Gray", RGB8 { r: 47, g: 79, b: 79 }),
      ("Dark Turquoise", RGB8 { r: 0, g: 206, b: 209 }),
      ("Dark Violet", RGB8 { r: 148, g: 0, b: 211 }),
      ("Deep Pink", RGB8 { r: 255, g: 20, b: 147 }),
      ("Deep Sky Blue", RGB8 { r: 0, g: 191, b: 255 }),
      ("Dim Gray", RGB8 { r: 105, g: 105, b: 105 }),
      ("Dodger Blue", RGB8 { r: 30, g: 144, b: 255 }),
      ("Firebrick", RGB8 { r: 178, g: 34, b: 34 }),
      ("Floral White", RGB8 { r: 255, g: 250, b: 240 }),
      ("Forest Green", RGB8 { r: 34, g: 139, b: 34 }),
      ("Gainsboro", RGB8 { r: 220, g: 220, b: 220 }),
      ("Ghost White", RGB8 { r: 248, g: 248, b: 255 }),
      ("Gold", RGB8 { r: 255, g: 215, b: 0 }),
      ("Goldenrod", RGB8 { r: 218, g: 165, b: 32 }),
      ("Gray", RGB8 { r: 128, g: 128, b: 128 }),
      ("Green", RGB8 { r: 0, g: 128, b: 0 }),
      ("Green Yellow", RGB8 { r: 173, g: 255, b: 47 }),
      ("Honeydew", RGB8 { r: 240, g: 255, b: 240 }),
      ("Hot Pink", RGB8 { r: 255, g: 105, b: 180 }),
      ("Indian Red", RGB8 { r: 205, g: 92, b: 92 }),
      ("Indigo", RGB8 { r: 75, g: 0, b: 130 }),
      ("Ivory", RGB8 { r: 255, g: 255, b: 240 }),
      ("Khaki", RGB8 { r: 240, g: 230, b: 140 }),
      ("Lavender", RGB8 { r: 230, g: 230, b: 250 }),
      ("Lavender Blush", RGB8 { r: 255, g: 240, b: 245 }),
      ("Lawn Green", RGB8 { r: 124, g: 252, b: 0 }),
      ("Lemon Chiffon", RGB8 { r: 255, g: 250, b: 205 }),
      ("Light Blue", RGB8 { r: 173, g: 216, b: 230 }),
      ("Light Coral", RGB8 { r: 240, g: 128, b: 128 }),
      ("Light Cyan", RGB8 { r: 224, g: 255, b: 255 }),
      ("Light Goldenrod Yellow", RGB8 { r: 250, g: 250, b: 210 }),
      ("Light Gray", RGB8 { r: 211, g: 211, b: 211 }),
      ("Light Green", RGB8 { r: 144, g: 238, b: 144 }),
      ("Light Pink", RGB8 { r: 255, g: 182, b: 193 }),
      ("Light Salmon", RGB8 { r: 255, g: 160, b: 122 }),
      ("Light Sea Green", RGB8 { r: 32, g: 178, b: 170 }),
      ("Light Sky Blue", RGB8 { r: 135, g: 206, b: 250 }),
      ("Light Slate Gray", RGB8 { r: 119, g: 136, b: 153 }),
      ("Light Steel Blue", RGB8 { r: 176, g: 196, b: 222 }),
      ("Light Yellow", RGB8 { r: 255, g: 255, b: 224 }),
      ("Lime", RGB8 { r: 0, g: 255, b: 0 }),
      ("Lime Green", RGB8 { r: 50, g: 205, b: 50 }),
      ("Linen", RGB8 { r: 250, g: 240, b: 230 }),
      ("Magenta", RGB8 { r: 255, g: 0, b: 255 }),
      ("Maroon", RGB8 { r: 128, g: 0, b: 0 }),
      ("Medium Aquamarine", RGB8 { r: 102, g: 205, b: 170 }),
      ("Medium Blue", RGB8 { r: 0, g: 0, b: 205 }),
      ("Medium Orchid", RGB8 { r: 186, g: 85, b: 211 }),
      ("Medium Purple", RGB8 { r: 147, g: 112, b: 219 }),
      ("Medium Sea Green", RGB8 { r: 60, g: 179, b: 113 }),
      ("Medium Slate Blue", RGB8 { r: 123, g: 104, b: 238 }),
      ("Medium Spring Green", RGB8 { r: 0, g: 250, b: 154 }),
      ("Medium Turquoise", RGB8 { r: 72, g: 209, b: 204 }),
      ("Medium Violet Red", RGB8 { r: 199, g: 21, b: 133 }),
      ("Midnight Blue", RGB8 { r: 25, g: 25, b: 112 }),
      ("Mint Cream", RGB8 { r: 245, g: 255, b: 250 }),
      ("Misty Rose", RGB8 { r: 255, g: 228, b: 225 }),
      ("Moccasin", RGB8 { r: 255, g: 228, b: 181 }),
      ("Navajo White", RGB8 { r: 255, g: 222, b: 173 }),
      ("Navy", RGB8 { r: 0, g: 0, b: 128 }),
      ("Old Lace", RGB8 { r: 253, g: 245, b: 230 }),
      ("Olive", RGB8 { r: 128, g: 128, b: 0 }),
      ("Olive Drab", RGB8 { r: 107, g: 142, b: 35 }),
      ("Orange", RGB8 { r: 255, g: 165, b: 0 }),
      ("Orange Red", RGB8 { r: 255, g: 69, b: 0 }),
      ("Orchid", RGB8 { r: 218, g: 112, b: 214 }),
      ("Pale Goldenrod", RGB8 { r: 238, g: 232, b: 170 }),
      ("Pale Green", RGB8 { r: 152, g: 251, b: 152 }),
      ("Pale Turquoise", RGB8 { r: 175, g: 238, b: 238 }),
      ("Pale Violet Red", RGB8 { r: 219, g: 112, b: 147 }),
      ("Papaya Whip", RGB8 { r: 255, g: 239, b: 213 }),
      ("Peach Puff", RGB8 { r: 255, g: 218, b: 185 }),
      ("Peru", RGB8 { r: 205, g: 133, b: 63 }),
      ("Pink", RGB8 { r: 255, g: 192, b: 203 }),
      ("Plum", RGB8 { r: 221, g: 160, b: 221 }),
      ("Powder Blue", RGB8 { r: 176, g: 224, b: 230 }),
      ("Purple", RGB8 { r: 128, g: 0, b: 128 }),
      ("Rebecca Purple", RGB8 { r: 102, g: 51, b: 153 }),
      ("Red", RGB8 { r: 255, g: 0, b: 0 }),
      ("Rosy Brown", RGB8 { r: 188, g: 143, b: 143 }),
      ("Royal Blue", RGB8 { r: 65, g: 105, b: 225 }),
      ("Saddle Brown", RGB8 { r: 139, g: 69, b: 19 }),
      ("Salmon", RGB8 { r: 250, g: 128, b: 114 }),
      ("Sandy Brown", RGB8 { r: 244, g: 164, b: 96 }),
      ("Sea Green", RGB8 { r: 46, g: 139, b: 87 }),
      ("Seashell", RGB8 { r: 255, g: 245, b: 238 }),
      ("Sienna", RGB8 { r: 160, g: 82, b: 45 }),
      ("Silver", RGB8 { r: 192, g: 192, b: 192 }),
      ("Sky Blue", RGB8 { r: 135, g: 206, b: 235 }),
      ("Slate Blue", RGB8 { r: 106, g: 90, b: 205 }),
      ("Slate Gray", RGB8 { r: 112, g: 128, b: 144 }),
      ("Snow", RGB8 { r: 255, g: 250, b: 250 }),
      ("Spring Green", RGB8 { r: 0, g: 255, b: 127 }),
      ("Steel Blue", RGB8 { r: 70, g: 130, b: 180 }),
      ("Tan", RGB8 { r: 210, g: 180, b: 140 }),
      ("Teal", RGB8 { r: 0, g: 128, b: 128 }),
      ("Thistle", RGB8 { r: 216, g: 191, b: 216 }),
      ("Tomato", RGB8 { r: 255, g: 99, b: 71 }),
      ("Turquoise", RGB8 { r: 64, g: 224, b: 208 }),
      ("Violet", RGB8 { r: 238, g: 130, b: 238 }),
      ("Wheat", RGB8 { r: 245, g: 222, b: 179 }),
      ("White", RGB8 { r: 255, g: 255, b: 255 }),
      ("White Smoke", RGB8 { r: 245, g: 245, b: 245 }),
      ("Yellow", RGB8 { r: 255, g: 255, b: 0 }),
      ("Yellow Green", RGB8 { r: 154, g: 205, b: 50 }),
    ].into_iter().map(|(name, rgb)| NameEntry { name, rgb }).collect()
  };
}
