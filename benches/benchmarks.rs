//! Benchmarks for the hot paths of the settings record

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use std::time::Duration;

use benchforge::toolchain::settings::TargetRuntimeSettings;

pub fn settings_benchmark(c: &mut Criterion) {
    c.bench_function("Builder - full construction", |b| {
        b.iter(|| {
            TargetRuntimeSettings::builder(
                black_box("net7.0"),
                Some(black_box("7.0.1").into()),
                black_box("Custom7"),
            )
            .packages_path(Path::new("/pkgs"))
            .timeout(Duration::from_secs(300))
            .build()
        })
    });

    c.bench_function("Preset derivation", |b| {
        b.iter(|| {
            TargetRuntimeSettings::NET_60.with_custom_dotnet_cli_path(
                black_box(Path::new("/opt/dotnet/dotnet")),
                Some(".NET 6.0 custom".into()),
            )
        })
    });

    c.bench_function("Settings serialization", |b| {
        let settings = TargetRuntimeSettings::NET_70.with_timeout(Some(Duration::from_secs(30)));
        b.iter(|| serde_json::to_string(black_box(&settings)))
    });
}

criterion_group!(benches, settings_benchmark);
criterion_main!(benches);
