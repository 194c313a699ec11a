//! Criterion benchmarks for parsing, formatting and recasing resource IDs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use arm_resource_id::{
    CaseSensitivity, CustomDomainId, Registry, ResourceId, RoleAssignmentId, ServerId,
    SqlContainerId,
};

const SERVER: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.AnalysisServices/servers/Server1";
const CUSTOM_DOMAIN: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.Cdn/profiles/profile1/endpoints/endpoint1/customdomains/domain1";
const ROLE_ASSIGNMENT: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.KeyVault/vaults/vault1/providers/Microsoft.Authorization/roleAssignments/ra1";

/// Benchmark: strict and insensitive parsing of shapes of varying depth
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for sensitivity in [CaseSensitivity::Strict, CaseSensitivity::Insensitive] {
        let mode = format!("{sensitivity:?}");

        group.throughput(Throughput::Bytes(SERVER.len() as u64));
        group.bench_with_input(BenchmarkId::new("server", &mode), &SERVER, |b, id| {
            b.iter(|| ServerId::parse_with(black_box(id), sensitivity));
        });

        group.throughput(Throughput::Bytes(CUSTOM_DOMAIN.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("custom_domain", &mode),
            &CUSTOM_DOMAIN,
            |b, id| {
                b.iter(|| CustomDomainId::parse_with(black_box(id), sensitivity));
            },
        );

        group.throughput(Throughput::Bytes(ROLE_ASSIGNMENT.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("role_assignment", &mode),
            &ROLE_ASSIGNMENT,
            |b, id| {
                b.iter(|| RoleAssignmentId::parse_with(black_box(id), sensitivity));
            },
        );
    }

    group.finish();
}

/// Benchmark: canonical formatting
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let server = ServerId::new("12345678-1234-9876-4563-123456789012", "resGroup1", "Server1");
    group.bench_function("server", |b| {
        b.iter(|| black_box(&server).id());
    });

    let container = SqlContainerId::new(
        "12345678-1234-9876-4563-123456789012",
        "resGroup1",
        "account1",
        "database1",
        "container1",
    );
    group.bench_function("sql_container", |b| {
        b.iter(|| black_box(&container).id());
    });

    group.finish();
}

/// Benchmark: recasing against the full built-in registry
fn bench_recase(c: &mut Criterion) {
    let mut group = c.benchmark_group("recase");
    let registry: &Registry = arm_resource_id::register_all();

    let cases = [
        ("server", SERVER.to_ascii_lowercase()),
        ("custom_domain", CUSTOM_DOMAIN.to_ascii_uppercase()),
        ("role_assignment", ROLE_ASSIGNMENT.to_ascii_lowercase()),
    ];

    for (name, id) in &cases {
        group.bench_with_input(BenchmarkId::new("structural", name), id, |b, id| {
            b.iter(|| registry.recase(black_box(id)));
        });
    }

    let unknown = format!("{}/keys/key1", SERVER.to_ascii_lowercase());
    group.bench_function("keywords_only", |b| {
        b.iter(|| registry.recase_keywords(black_box(&unknown)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_format, bench_recase);
criterion_main!(benches);
