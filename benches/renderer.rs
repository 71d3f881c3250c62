use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use subgraph_renderer::adjacency::PageOffsets;
use subgraph_renderer::config::Config;
use subgraph_renderer::document::GraphStore;
use subgraph_renderer::render::render_svg;
use subgraph_renderer::renderer::SubgraphRenderer;

/// A hub with `fan_in` incoming and `fan_out` outgoing neighbors plus a ring of
/// unrelated edges the selector has to skip.
fn hub_document(fan_in: usize, fan_out: usize, noise: usize) -> String {
    let mut vertices = vec![r#"{"id":"hub","label":"Hub"}"#.to_string()];
    let mut edges = Vec::new();
    for i in 0..fan_in {
        vertices.push(format!(r#"{{"id":"in{i}","label":"Caller {i}"}}"#));
        edges.push(format!(r#"{{"id":"ein{i}","label":"calls","source":"in{i}","dest":"hub"}}"#));
    }
    for i in 0..fan_out {
        vertices.push(format!(r#"{{"id":"out{i}","label":"Callee {i}"}}"#));
        edges.push(format!(r#"{{"id":"eout{i}","label":"uses","source":"hub","dest":"out{i}"}}"#));
    }
    for i in 0..noise {
        let next = (i + 1) % noise.max(1);
        vertices.push(format!(r#"{{"id":"n{i}"}}"#));
        edges.push(format!(r#"{{"id":"en{i}","source":"n{i}","dest":"n{next}"}}"#));
    }
    format!(
        r#"{{"vertices":[{}],"edges":[{}],"images":[{{"id":"vertexIcon","filename":"vertex.svg","width":32,"height":32}},{{"id":"arrow","filename":"arrow.svg","width":16,"height":8}}]}}"#,
        vertices.join(","),
        edges.join(",")
    )
}

fn renderer_for(document: &str) -> SubgraphRenderer {
    let store = GraphStore::parse(document).expect("document parse failed");
    let config = Config::default();
    let settings = store.settings("hub", config.render.page_size);
    SubgraphRenderer::new(store.subgraph(), settings, config).expect("renderer setup failed")
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &(fan, noise) in &[(8usize, 0usize), (64, 256), (512, 4096)] {
        let document = hub_document(fan, fan, noise);
        let renderer = renderer_for(&document);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("fan{fan}_noise{noise}")),
            &renderer,
            |b, renderer| {
                b.iter(|| {
                    let rendered = renderer
                        .layout(black_box(PageOffsets::new(0, 0)), black_box(800.0))
                        .expect("layout failed");
                    black_box(rendered);
                })
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let document = hub_document(64, 64, 256);
    let renderer = renderer_for(&document);
    let rendered = renderer
        .layout(PageOffsets::default(), 800.0)
        .expect("layout failed");
    c.bench_function("render_svg", |b| {
        b.iter(|| {
            let svg = render_svg(
                black_box(&rendered.layout),
                renderer.images(),
                &renderer.config().theme,
                renderer.config(),
            )
            .expect("render failed");
            black_box(svg);
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let document = hub_document(512, 512, 4096);
    c.bench_function("parse_document", |b| {
        b.iter(|| {
            let store = GraphStore::parse(black_box(&document)).expect("parse failed");
            black_box(store);
        })
    });
}

criterion_group!(benches, bench_layout, bench_render, bench_parse);
criterion_main!(benches);
