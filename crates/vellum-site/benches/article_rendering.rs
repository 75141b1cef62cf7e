//! Benchmarks for article rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use vellum_richtext::{Node, RenderContext, render};
use vellum_site::excerpt;

/// Generate a rich document with the given structure.
fn generate_document(sections: usize, paragraphs_per_section: usize) -> serde_json::Value {
    let mut content = Vec::new();
    for i in 0..sections {
        content.push(json!({
            "nodeType": "heading-2",
            "content": [{"nodeType": "text", "value": format!("Section {i}"), "marks": []}],
        }));
        for j in 0..paragraphs_per_section {
            content.push(json!({
                "nodeType": "paragraph",
                "content": [
                    {"nodeType": "text", "value": format!("Paragraph {j} in section {i} with "), "marks": []},
                    {"nodeType": "text", "value": "bold", "marks": [{"type": "bold"}]},
                    {"nodeType": "text", "value": " text.", "marks": []},
                ],
            }));
        }
    }
    json!({"nodeType": "document", "content": content})
}

fn bench_render_document(c: &mut Criterion) {
    let document = Node::document_from_json(&generate_document(10, 3));
    let context = RenderContext::new("https://example.com/default.png");

    c.bench_function("render_document_10_sections", |b| {
        b.iter(|| render(&document, &context));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let context = RenderContext::new("https://example.com/default.png");
    let mut group = c.benchmark_group("render_document_sizes");

    for sections in [1, 10, 50] {
        let document = Node::document_from_json(&generate_document(sections, 3));
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &document,
            |b, document| {
                b.iter(|| render(document, &context));
            },
        );
    }
    group.finish();
}

fn bench_excerpt(c: &mut Criterion) {
    let document = Node::document_from_json(&generate_document(10, 3));

    c.bench_function("excerpt_10_sections", |b| {
        b.iter(|| excerpt(&document));
    });
}

criterion_group!(
    benches,
    bench_render_document,
    bench_render_varying_sizes,
    bench_excerpt
);
criterion_main!(benches);
