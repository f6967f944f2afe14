// Signing benchmarks for the Gallactic SDK.
//
// Covers keypair generation, key decoding, signing message serialization,
// and full offline preparation of transfers with a growing number of inputs.

use std::sync::Arc;

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::Value;

use gallactic_sdk::crypto::GallacticKeypair;
use gallactic_sdk::transaction::{
    assign_sequence, sign, signing_message, Broadcaster, ParticipantEntry, TransactionDraft,
    TxBody,
};
use gallactic_sdk::transport::{NodeRequest, Transport, TransportError};
use gallactic_sdk::{Ed25519Backend, MethodNames};

struct NullTransport;

#[async_trait]
impl Transport for NullTransport {
    async fn send(&self, _request: NodeRequest) -> Result<Value, TransportError> {
        Ok(Value::Null)
    }
}

fn transfer(inputs: usize) -> TransactionDraft {
    let from = (0..inputs)
        .map(|i| ParticipantEntry::new(format!("A{i:04}"), 1_000_000))
        .collect();
    let to = vec![ParticipantEntry::new("B0000", 1_000_000 * inputs as u64)];
    let mut draft = TransactionDraft::new();
    draft.set_tx(TxBody::send(from, to));
    draft.set_chain_id("gallactic-bench");
    draft.set_sequence(42);
    draft
}

fn bench_keypair_generation(c: &mut Criterion) {
    c.bench_function("ed25519/keypair_generate", |b| {
        b.iter(GallacticKeypair::generate);
    });
}

fn bench_key_decoding(c: &mut Criterion) {
    let encoded = GallacticKeypair::generate().to_base58();

    c.bench_function("keys/decode_base58", |b| {
        b.iter(|| GallacticKeypair::from_base58(&encoded).unwrap());
    });
}

fn bench_signing_message(c: &mut Criterion) {
    let mut draft = transfer(1);
    assign_sequence(&mut draft, 42).unwrap();

    c.bench_function("tx/signing_message", |b| {
        b.iter(|| signing_message(&draft).unwrap());
    });
}

fn bench_sign_transfer(c: &mut Criterion) {
    let key = GallacticKeypair::generate().to_base58();
    let mut draft = transfer(1);
    assign_sequence(&mut draft, 42).unwrap();

    c.bench_function("tx/sign_transfer", |b| {
        b.iter(|| sign(&Ed25519Backend, &key, &draft).unwrap());
    });
}

fn bench_prepare_by_inputs(c: &mut Criterion) {
    let key = GallacticKeypair::generate().to_base58();
    let broadcaster = Broadcaster::new(Arc::new(NullTransport), MethodNames::default());
    let mut group = c.benchmark_group("tx/prepare");

    for inputs in [1, 10, 50, 200] {
        group.throughput(Throughput::Elements(inputs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(inputs), &inputs, |b, &n| {
            let template = transfer(n);
            b.iter(|| {
                let mut draft = template.clone();
                broadcaster.prepare(&mut draft, &key).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_key_decoding,
    bench_signing_message,
    bench_sign_transfer,
    bench_prepare_by_inputs,
);
criterion_main!(benches);
