use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use diagram_rs::api::normalize_fences;
use diagram_rs::core::{Palette, PaletteBlend, Rgb};
use diagram_rs::dom::Document;
use diagram_rs::theme::render_config_from_palette;

fn bench_palette_derive(c: &mut Criterion) {
    let text = Rgb::new(17.0, 17.0, 17.0);
    let background = Rgb::new(255.0, 255.0, 255.0);
    let accent = Rgb::new(0.0, 102.0, 204.0);

    c.bench_function("palette_derive", |b| {
        b.iter(|| {
            Palette::derive(
                black_box(text),
                black_box(background),
                black_box(accent),
                black_box(PaletteBlend::default()),
            )
        })
    });
}

fn bench_render_config_json(c: &mut Criterion) {
    let palette = Palette::derive(
        Rgb::new(17.0, 17.0, 17.0),
        Rgb::new(255.0, 255.0, 255.0),
        Rgb::new(0.0, 102.0, 204.0),
        PaletteBlend::default(),
    );
    let config = render_config_from_palette(&palette, "base");

    c.bench_function("render_config_json", |b| {
        b.iter(|| config.to_json_pretty().expect("serialize"))
    });
}

fn bench_normalize_100_fences(c: &mut Criterion) {
    let mut prototype = Document::new();
    for i in 0..100 {
        let pre = prototype.create_element("pre");
        prototype.append_child(prototype.body(), pre);
        let code = prototype.create_element("code");
        prototype.append_child(pre, code);
        prototype.add_class(code, "language-mermaid");
        prototype.set_text(code, &format!("graph TD; n{i} --> m{i}"));
    }

    c.bench_function("normalize_100_fences", |b| {
        b.iter_batched(
            || prototype.clone(),
            |mut page| normalize_fences(&mut page, "language-mermaid", "mermaid"),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_palette_derive,
    bench_render_config_json,
    bench_normalize_100_fences
);
criterion_main!(benches);
