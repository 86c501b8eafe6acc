//! Write `report.html` describing a palette the way an image would
//! yield it: swatches, conversions, schemes, contrast and color
//! blindness simulations.  Optional arguments are hex colors to
//! describe instead of the built-in palette.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::{RGB, RGB8};
use shadex::{describe_color, export::{css_rgb, export_schemes},
             ExportFormat, Explorer, HexColor, NamedColor, PaletteConfig,
             RGBColor};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[HexColor],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}; color: {}\">{c}</td>",
                 c.contrasting())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, palette: &[NamedColor]) -> Result<(), Err> {
    let colors: Vec<_> = palette.iter().map(|n| n.color).collect();
    let names: Vec<_> = palette.iter().map(|n| n.name.as_str()).collect();
    table_of_colors(fh, &colors, 90, &names.join(", "))
}

fn describe(fh: &mut impl Write, named: &NamedColor) -> Result<(), Err> {
    let d = describe_color(&named.color);
    writeln!(fh, "<h3>{} ({})</h3>", named.name, d.hex)?;
    writeln!(fh, "<p>RGB: {}<br/>HSL: {}<br/>CMYK: {}</p>",
             css_rgb(d.rgb), d.hsl, d.cmyk)?;
    for s in &d.schemes {
        table_of_colors(fh, &s.hex_colors(), 60,
                        &format!("{}: {}", s.kind, s.kind.description()))?;
    }
    let grade = |ok: bool| if ok { "pass" } else { "fail" };
    writeln!(fh, "<p>Contrast with {}: {:.2}:1, AA {}, AAA {}, \
                  AA large {}, AAA large {}</p>",
             d.contrasting, d.contrast.ratio,
             grade(d.contrast.meets_aa), grade(d.contrast.meets_aaa),
             grade(d.contrast.meets_aa_large),
             grade(d.contrast.meets_aaa_large))?;
    let simulated: Vec<_> = d.simulations.iter()
        .map(|s| HexColor::from(s.result_color)).collect();
    let kinds: Vec<_> = d.simulations.iter()
        .map(|s| format!("{}: {}", s.kind, s.kind.description())).collect();
    table_of_colors(fh, &simulated, 60, &kinds.join("<br/>"))?;
    writeln!(fh, "<pre>{}</pre>", export_schemes(&d.schemes, ExportFormat::Css))?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let explorer: Explorer = Explorer::new(PaletteConfig::default())?;
    let args: Vec<String> = env::args().skip(1).collect();
    let samples: Vec<RGB<i32>> = if args.is_empty() {
        // What an extractor could return for a sunset photograph.
        vec![RGB::new(51, 102, 204), RGB::new(250, 128, 114),
             RGB::new(255, 165, 0), RGB::new(18, 52, 86),
             RGB::new(118, 118, 118), RGB::new(42, 157, 143)]
    } else {
        args.iter().map(|a| -> Result<RGB<i32>, Err> {
            let c: RGB8 = HexColor::parse(a)?.rgb();
            Ok(RGB::new(c.r as i32, c.g as i32, c.b as i32))
        }).collect::<Result<_, Err>>()?
    };
    let named = explorer.extract_palette(&samples);

    let mut fh = BufWriter::new(File::create("report.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>shadex: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h2>Palette</h2>")?;
    palette(&mut fh, &named)?;
    for n in &named {
        describe(&mut fh, n)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
