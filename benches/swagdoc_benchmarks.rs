use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swagdoc_core::{comment::extract_blocks, compile, compile_source, lexer::Lexer};

// ============================================================================
// Test Data: Varying Complexity and Size
// ============================================================================

const TINY_SOURCE: &str = "/** @route GET /ping */";

const SMALL_SOURCE: &str = r#"
/**
 * List pets.
 * @route GET /pets
 * @group pets - Operations about pets
 * @param {integer} limit.query - maximum number of results
 * @returns {Array.<Pet>} 200 - An array of pets
 */
router.get('/pets', list);
"#;

const MEDIUM_SOURCE: &str = r#"
/**
 * @typedef Pet
 * @property {integer} id.required - pet id
 * @property {string} name.required - pet name
 * @property {Owner.model} owner
 */

/**
 * @typedef Owner
 * @property {integer} id.required
 * @property {string} email
 */

/**
 * List pets.
 * @route GET /pets
 * @group pets - Operations about pets
 * @param {integer} limit.query - maximum number of results
 * @param {string} cursor.query - pagination cursor
 * @operationId listPets
 * @produces application/json application/xml
 * @returns {Array.<Pet>} 200 - An array of pets
 * @returns {Error.model} default - Unexpected error
 */
router.get('/pets', list);

/**
 * Create a pet.
 * @route POST /pets
 * @group pets - Operations about pets
 * @param {Pet.model} pet.body.required - the new pet
 * @consumes application/json
 * @returns {Pet.model} 201 - Created
 */
router.post('/pets', create);
"#;

// Generate a large route file for stress testing
fn generate_route_file(route_count: usize) -> String {
    let mut source = String::from("'use strict';\n");
    for i in 0..route_count {
        source.push_str(&format!(
            "/**\n * Route {i}\n * @route GET /items/{i}\n * @group items - Items\n * @param {{string}} id.path.required - item id\n * @returns {{Item.model}} 200 - item {i}\n */\nrouter.get('/items/{i}', handler{i});\n\n"
        ));
    }
    source
}

// ============================================================================
// Lexer Benchmarks
// ============================================================================

fn bench_lexer_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_by_size");

    for (name, source) in [
        ("tiny", TINY_SOURCE),
        ("small", SMALL_SOURCE),
        ("medium", MEDIUM_SOURCE),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let mut lexer = Lexer::new(black_box(src));
                lexer.lex()
            })
        });
    }

    group.finish();
}

// ============================================================================
// Extraction and Compilation Benchmarks
// ============================================================================

fn bench_extract_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_route_scaling");

    for size in [10, 100, 1000] {
        let source = generate_route_file(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, src| {
            b.iter(|| extract_blocks(black_box(src)))
        });
    }

    group.finish();
}

fn bench_compile_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_route_scaling");

    for size in [10, 100, 1000] {
        let blocks = extract_blocks(&generate_route_file(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &blocks, |b, blocks| {
            b.iter(|| compile(black_box(blocks)))
        });
    }

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_e2e_with_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_with_json_serialization");

    for (name, source) in [
        ("tiny", TINY_SOURCE),
        ("small", SMALL_SOURCE),
        ("medium", MEDIUM_SOURCE),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let fragments = compile_source(black_box(src), "benchmark.js").unwrap();
                serde_json::to_string(&fragments)
            })
        });
    }

    group.finish();
}

criterion_group!(lexer_benches, bench_lexer_sizes);

criterion_group!(compile_benches, bench_extract_scaling, bench_compile_blocks);

criterion_group!(e2e_benches, bench_e2e_with_serialization);

criterion_main!(lexer_benches, compile_benches, e2e_benches);
