use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sipuri::{SipUri, decompose};

fn bench_decompose(c: &mut Criterion) {
    let line = b"Contact: <sip:alice:secretword@client.atlanta.example.com:5060;transport=tcp;lr?subject=project%20x&priority=urgent>\r\n";
    let start = 10;
    let end = line.len() - 3;

    c.bench_function("decompose contact uri", |b| {
        b.iter(|| {
            let uri = decompose(black_box(line), start, end).unwrap();
            black_box(uri);
        });
    });
}

fn bench_serialize(c: &mut Criterion) {
    let uri = SipUri::parse("sip:+1-212-555-1212:1234@gateway.com;user=phone?to=alice%40atlanta.com").unwrap();
    let mut buf = [0u8; 256];

    c.bench_function("serialize uri", |b| {
        b.iter(|| {
            let n = black_box(&uri).serialize_into(&mut buf).unwrap();
            black_box(n);
        });
    });
}

criterion_group!(benches, bench_decompose, bench_serialize);
criterion_main!(benches);
