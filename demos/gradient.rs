use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use plot_colormap::{blue_red, Colormapper, ColoredScatter, Diverging,
                    Grayscale, Jet, RGBColor, XYZ};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Perceived lightness of `c` as a gray.
fn to_gray(c: RGB8) -> RGB8 {
    let l = (c.to_lab().l / 100. * 255.).round().clamp(0., 255.) as u8;
    RGB8::new(l, l, l)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(to_gray(c)))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn strip(fh: &mut impl Write, map: &impl Colormapper<RGB8>, n: usize,
         width: u32, comment: &str) -> Result<(), Err> {
    let colors: Vec<_> = map.range(0., 1., n).map(|(_, c)| c).collect();
    table_of_colors(fh, &colors, width, comment)
}

fn diverging(fh: &mut impl Write, c0: [u8; 3], c1: [u8; 3], n: usize,
             comment: &str) -> Result<(), Err> {
    let c0 = RGB8{ r: c0[0], g: c0[1], b: c0[2] };
    let c1 = RGB8{ r: c1[0], g: c1[1], b: c1[2] };
    strip(fh, &Diverging::new(&c0, &c1), n, 1, comment)
}


fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Plot_colormap: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Jet and grayscale</h3>")?;
    strip(&mut fh, &Jet::default(), 10, 43, "jet")?;
    strip(&mut fh, &Jet::default(), 150, 1, "jet")?;
    strip(&mut fh, &Grayscale::default(), 150, 1, "grayscale")?;
    strip(&mut fh, &Grayscale::inverted(0., 1.), 150, 1,
          "grayscale (inverted)")?;

    writeln!(fh, "<h3>Diverging (MSH interpolation)</h3>")?;
    strip(&mut fh, &blue_red(), 10, 43, "blue-red")?;
    strip(&mut fh, &blue_red(), 150, 1, "blue-red")?;
    let mut shifted = blue_red();
    shifted.set_midpoint(0.25);
    strip(&mut fh, &shifted, 150, 1, "blue-red, midpoint at 0.25")?;
    diverging(&mut fh, [111, 0, 255], [255, 152, 0], 150, "purple-orange")?;
    diverging(&mut fh, [0, 130, 60], [190, 0, 110], 150, "green-magenta")?;
    diverging(&mut fh, [230, 230, 230], [180, 4, 38], 150,
              "gray-red (adjusted hue)")?;

    writeln!(fh, "<h3>Color bar of a scatter plot</h3>")?;
    let pts: Vec<XYZ> = (0 .. 50).map(|i| {
        let x = i as f64 / 5.;
        XYZ { x, y: x.sin(), z: 2. + x * x } }).collect();
    let mut scatter = ColoredScatter::<RGB8>::new(pts.as_slice())?;
    let colors: Vec<_> = scatter.colorbar(150).map(|(_, c)| c).collect();
    let comment = format!("z ∈ [{:.1}, {:.1}]", scatter.min(), scatter.max());
    table_of_colors(&mut fh, &colors, 1, &comment)?;
    scatter.set_colormap(Jet::default());
    let colors: Vec<_> = scatter.glyphs().into_iter().map(|(_, _, c)| c)
        .collect();
    table_of_colors(&mut fh, &colors, 8, "glyph colors (jet)")?;
    if let Some(m) = scatter.colormapper_mut().as_scaled_mut() {
        let (min, max) = m.scale();
        writeln!(fh, "<p>Jet scaled to [{min:.1}, {max:.1}].</p>")?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
