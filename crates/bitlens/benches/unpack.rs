use bitlens::field::Bitfield;
use bitlens::layout::Layout;
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_layout(field_count: u32) -> Layout {
    let size = 32 / field_count;
    let fields: Vec<Bitfield> = (0..field_count)
        .map(|i| Bitfield::new(format!("f{}", i), size))
        .collect();

    Layout::compile(&fields).unwrap()
}

fn bench_unpack(c: &mut Criterion) {
    for &field_count in &[1u32, 4, 8, 16, 32] {
        let layout = gen_layout(field_count);

        c.bench_function(&format!("unpack_{}_fields", field_count), |b| {
            b.iter(|| {
                let _ = layout.unpack(0x66339FBF).unwrap();
            })
        });
    }
}

fn bench_update(c: &mut Criterion) {
    let layout = gen_layout(4);

    c.bench_function("update_last_field", |b| {
        b.iter(|| {
            let _ = layout.update(0x66339FBF, 3, Some(0xFF)).unwrap();
        })
    });
}

criterion_group!(benches, bench_unpack, bench_update);
criterion_main!(benches);
