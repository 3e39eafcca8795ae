//! Trap dispatch overhead: bare proxy vs a four-layer stack

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scrim::{Object, PropKey, Proxy, Transparent, TrapHandlerExt, Value};

fn target_with_props() -> Value {
    let obj = Object::new();
    for i in 0..32 {
        obj.set_own(PropKey::index(i), Value::number(i as f64));
    }
    Value::object(obj)
}

fn bench_dispatch(c: &mut Criterion) {
    let key = PropKey::index(17);

    let bare = Proxy::new(target_with_props(), Transparent);
    c.bench_function("get/bare", |b| {
        b.iter(|| bare.get(black_box(&key)).unwrap())
    });

    let stacked = Proxy::new(
        target_with_props(),
        Transparent
            .default_to_primitive()
            .default_type_tag()
            .bind_this()
            .expose_target(),
    );
    c.bench_function("get/four_layers", |b| {
        b.iter(|| stacked.get(black_box(&key)).unwrap())
    });

    let mapped = Proxy::new(
        target_with_props(),
        Transparent.map_target(|t: &Value| t.clone()),
    );
    c.bench_function("get/identity_mapped", |b| {
        b.iter(|| mapped.get(black_box(&key)).unwrap())
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
