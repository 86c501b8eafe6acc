//! Text renderings of colors and schemes, ready to be copied or saved.

use rgb::RGB8;
use crate::Scheme;

/// Output formats for [`export_schemes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSS custom properties, `--analogous-1: hsl(…);`.
    Css,
    /// Sass variables, `$analogous-1: hsl(…)`.
    Sass,
    /// Bare list of colors, one per line.
    Palette,
}

/// CSS notation `rgb(r, g, b)`.
pub fn css_rgb(c: RGB8) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

/// Render `schemes` in the given format.  Named formats number the
/// colors of each scheme from 1 and separate schemes with a blank line.
pub fn export_schemes(schemes: &[Scheme], format: ExportFormat) -> String {
    let mut out = String::new();
    for (i, scheme) in schemes.iter().enumerate() {
        if i > 0 && format != ExportFormat::Palette { out.push('\n') }
        for (j, c) in scheme.colors.iter().enumerate() {
            let line = match format {
                ExportFormat::Css =>
                    format!("--{}-{}: {};\n", scheme.kind, j + 1, c),
                ExportFormat::Sass =>
                    format!("${}-{}: {}\n", scheme.kind, j + 1, c),
                ExportFormat::Palette => format!("{}\n", c),
            };
            out.push_str(&line);
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scheme, Hsl};

    #[test]
    fn css() {
        let s = [scheme::complementary(Hsl::new(220, 60, 50)),
                 scheme::triadic(Hsl::new(0, 100, 50))];
        assert_eq!(export_schemes(&s, ExportFormat::Css),
                   "--complementary-1: hsl(220, 60%, 50%);\n\
                    --complementary-2: hsl(40, 60%, 50%);\n\
                    \n\
                    --triadic-1: hsl(0, 100%, 50%);\n\
                    --triadic-2: hsl(120, 100%, 50%);\n\
                    --triadic-3: hsl(240, 100%, 50%);\n");
    }

    #[test]
    fn sass() {
        let s = [scheme::split_complementary(Hsl::new(0, 10, 20))];
        assert_eq!(export_schemes(&s, ExportFormat::Sass),
                   "$splitComplementary-1: hsl(0, 10%, 20%)\n\
                    $splitComplementary-2: hsl(150, 10%, 20%)\n\
                    $splitComplementary-3: hsl(210, 10%, 20%)\n");
    }

    #[test]
    fn palette() {
        let s = scheme::generate_all(Hsl::new(10, 20, 30));
        let out = export_schemes(&s, ExportFormat::Palette);
        assert_eq!(out.lines().count(), 5 + 5 + 2 + 3 + 3 + 4);
        assert!(out.starts_with("hsl(10, 20%, 0%)\n"));
        assert!(export_schemes(&[], ExportFormat::Css).is_empty());
    }

    #[test]
    fn rgb_text() {
        assert_eq!(css_rgb(RGB8 { r: 51, g: 102, b: 204 }), "rgb(51, 102, 204)");
    }
}
