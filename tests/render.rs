use cairo::{Context, ImageSurface};
use paintbox::config::TextConfig;
use paintbox::draw::{
    BLACK, CairoSurface, FontDescriptor, Graphics, Point, RED, Surface, TextMeasurer, WHITE,
};
use paintbox::layout::{Justify, ParagraphStyle};

fn image(width: i32, height: i32) -> ImageSurface {
    ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap()
}

fn graphics_on(image: &ImageSurface) -> Graphics<CairoSurface> {
    let surface = CairoSurface::for_image(image, FontDescriptor::default(), 16.0).unwrap();
    Graphics::new(surface, TextConfig::default())
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// First and last pixel rows holding any ink.
fn ink_rows(surface: &mut ImageSurface) -> Option<(usize, usize)> {
    surface.flush();
    let stride = surface.stride() as usize;
    let row_bytes = surface.width() as usize * 4;
    let data = surface.data().unwrap();
    let rows: Vec<usize> = data
        .chunks(stride)
        .enumerate()
        .filter(|(_, row)| row[..row_bytes].iter().any(|byte| *byte != 0))
        .map(|(index, _)| index)
        .collect();
    Some((*rows.first()?, *rows.last()?))
}

#[test]
fn text_baseline_sits_one_line_below_top() {
    for (top, size) in [(20.0, 16.0), (7.0, 32.0)] {
        let mut img = image(160, 100);
        let line_height;
        {
            let mut gfx = graphics_on(&img);
            gfx.set_font_size(size);
            line_height = gfx.line_height();
            gfx.draw_text(10.0, top, "H", BLACK);
        }
        assert_eq!(line_height, size);

        let (first, last) = ink_rows(&mut img).expect("glyph should leave ink");
        let baseline = top + line_height;
        assert!(
            first as f64 >= top,
            "ink at row {first} above the line top {top}"
        );
        assert!(
            (last as f64 + 1.0 - baseline).abs() <= 1.0,
            "glyph bottom at row {last}, baseline expected at {baseline}"
        );
    }
}

#[test]
fn paragraph_draws_text_pixels() {
    let mut img = image(300, 200);
    {
        let mut gfx = graphics_on(&img);
        let size = gfx.draw_paragraph(
            "The quick brown fox jumps over the lazy dog",
            10.0,
            10.0,
            120.0,
            Some(RED),
            &ParagraphStyle::default(),
        );
        assert!(size.height >= 2.0 * 16.0, "text should wrap at 120px");
    }
    assert!(surface_has_pixels(&mut img));
}

#[test]
fn dry_run_paragraph_leaves_surface_blank() {
    let mut img = image(200, 100);
    {
        let mut gfx = graphics_on(&img);
        let size = gfx.draw_paragraph(
            "nothing drawn",
            0.0,
            0.0,
            200.0,
            None,
            &ParagraphStyle::default(),
        );
        assert_eq!(size.height, 16.0);
    }
    assert!(!surface_has_pixels(&mut img));
}

#[test]
fn pango_widths_grow_with_text() {
    let img = image(10, 10);
    let gfx = graphics_on(&img);
    let surface = gfx.surface();
    let short = surface.measure_text_width("ab");
    let long = surface.measure_text_width("abababab");
    assert!(short > 0.0);
    assert!(long > short);
    assert_eq!(surface.line_height(), 16.0);
}

#[test]
fn wrapped_lines_fit_the_width() {
    let img = image(10, 10);
    let gfx = graphics_on(&img);
    let lines = gfx.split_text("Pack my box with five dozen liquor jugs", 90.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(gfx.surface().measure_text_width(line) < 90.0, "{line:?} overflows");
    }
}

#[test]
fn shapes_and_shadowed_label_render() {
    let mut img = image(200, 100);
    {
        let mut gfx = graphics_on(&img);
        gfx.clear(WHITE);
        let triangle = [
            Point::new(0.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ];
        gfx.draw_poly(&triangle, 50.0, 50.0, 0.3, 20.0, Some(BLACK), Some(RED));
        gfx.draw_circle(150.0, 50.0, 10.0, BLACK);
        gfx.draw_line(0.0, 0.0, 200.0, 100.0, BLACK, 2.0);
        gfx.draw_justified_text(0.0, 0.0, 200.0, "label", Justify::Right, BLACK, Some(RED));
        assert_eq!(gfx.surface().dimensions(), (200.0, 100.0));
    }
    assert!(surface_has_pixels(&mut img));
}

#[test]
fn context_can_be_wrapped_directly() {
    let img = image(50, 50);
    let ctx = Context::new(&img).unwrap();
    let mut surface = CairoSurface::new(ctx, 50.0, 50.0, FontDescriptor::default(), 12.0);
    surface.set_font_size(20.0);
    assert_eq!(surface.line_height(), 20.0);
    assert_eq!(surface.font(), &FontDescriptor::default());
}
