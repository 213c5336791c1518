use flagpost::FlagKind;

flagpost::define_bool!(kinds_strict, true, "Fail on the first malformed record");
flagpost::define_i32!(kinds_nice, -5, "Process niceness applied to workers");
flagpost::define_u32!(kinds_shards, 16, "Shards the keyspace is split into");
flagpost::define_i64!(kinds_watermark, -1, "Low watermark; negative disables trimming");
flagpost::define_u64!(kinds_span_ns, 1_000_000_000, "Span length in nanoseconds");
flagpost::define_f64!(kinds_decay, 0.99, "Decay applied per sampling interval");
flagpost::define_text!(kinds_codec, "zstd", "Codec for newly written segments");

fn main() {
    assert!(FLAGS_kinds_strict.get());
    assert_eq!(FLAGS_kinds_nice.get(), -5);
    assert_eq!(FLAGS_kinds_shards.get(), 16);
    assert_eq!(FLAGS_kinds_watermark.get(), -1);
    assert_eq!(FLAGS_kinds_span_ns.get(), 1_000_000_000);
    assert_eq!(FLAGS_kinds_decay.get().to_bits(), 0.99_f64.to_bits());
    assert_eq!(FLAGS_kinds_codec.get(), "zstd");

    let codec = flagpost::find("kinds_codec").expect("declared above");
    assert_eq!(codec.kind(), FlagKind::Text);
    assert_eq!(flagpost::iter().count(), 7);
}
