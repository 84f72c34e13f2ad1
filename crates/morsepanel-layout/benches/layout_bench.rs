use criterion::{black_box, criterion_group, criterion_main, Criterion};
use morsepanel_core::{
    Borders, PanelDesign, PanelGeometry, Rect, Restriction, SlotMetrics, Subpanel, Timing,
};
use morsepanel_layout::{emit, PanelLayoutEngine, ScriptGenerator, ScriptParameters};

fn gate_design() -> PanelDesign {
    PanelDesign::new(
        "San Francisco open your Golden Gate You let no stranger wait outside your door ",
        PanelGeometry {
            width: 60.0,
            height: 100.0,
            borders: Borders::uniform(1.0),
            restricted_border: 0.5,
        },
        SlotMetrics {
            height: 1.5,
            vertical_spacing: 0.5,
        },
        Timing::from_unit(2.0),
    )
    .with_subpanel(Subpanel::new("left_panel", Rect::new(0.0, 0.0, 19.5, 100.0), true))
    .with_subpanel(Subpanel::new("right_panel", Rect::new(20.5, 0.0, 60.0, 100.0), false))
    .with_restriction(Restriction::new(Rect::new(18.0, 0.0, 22.0, 100.0), false))
    .with_restriction(Restriction::new(Rect::new(20.5, 31.0, 28.0, 41.0), false))
    .with_restriction(Restriction::new(Rect::new(1.0, 50.0, 7.25, 59.75), false))
}

fn bench_layout(c: &mut Criterion) {
    let design = gate_design();
    c.bench_function("full_panel_layout", |b| {
        b.iter(|| PanelLayoutEngine::new(black_box(&design)).run())
    });

    let layout = PanelLayoutEngine::new(&design)
        .run()
        .expect("layout of the bench design");
    let generator = ScriptGenerator::new(ScriptParameters::default());
    c.bench_function("emit_scripts", |b| {
        b.iter(|| {
            emit(black_box(&layout), &design)
                .iter()
                .map(|o| generator.generate(o).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
