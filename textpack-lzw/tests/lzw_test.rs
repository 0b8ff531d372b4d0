//! LZW integration tests.

use textpack_core::{BitReader, BitWriter};
use textpack_lzw::{
    LzwConfig, LzwDecoder, LzwEncoder, LzwError, compress, compress_text, decompress,
    decompress_text,
};

const EOF: u16 = 128;

/// Pseudo-random 7-bit text drawn from `alphabet`.
fn random_text(size: usize, alphabet: &[u8], mut seed: u64) -> Vec<u8> {
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            alphabet[((seed >> 33) % alphabet.len() as u64) as usize]
        })
        .collect()
}

fn roundtrip(original: &[u8]) {
    let compressed = compress_text(original).expect("compression failed");
    let decompressed = decompress_text(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_roundtrip_simple() {
    roundtrip(b"TOBEORNOTTOBEORTOBEORNOT");
    roundtrip(b"abracadabra");
    roundtrip(b"It was the best of times, it was the worst of times.\n");
}

#[test]
fn test_lzw_empty_input() {
    let mut encoder = LzwEncoder::new(LzwConfig::TEXT).unwrap();
    assert_eq!(encoder.encode_codes(b"").unwrap(), vec![EOF]);

    roundtrip(b"");
}

#[test]
fn test_lzw_single_char() {
    let mut encoder = LzwEncoder::new(LzwConfig::TEXT).unwrap();
    assert_eq!(encoder.encode_codes(b"a").unwrap(), vec![b'a' as u16, EOF]);

    roundtrip(b"a");
}

#[test]
fn test_lzw_wire_format() {
    // 12-bit MSB-first codes 97 and 128
    let compressed = compress_text(b"a").unwrap();
    assert_eq!(compressed, vec![0x06, 0x10, 0x80]);

    let mut reader = BitReader::new(&compressed[..]);
    assert_eq!(reader.read_bits(12).unwrap(), 97);
    assert_eq!(reader.read_bits(12).unwrap(), 128);
}

#[test]
fn test_lzw_self_referential_case() {
    let mut encoder = LzwEncoder::new(LzwConfig::TEXT).unwrap();
    let codes = encoder.encode_codes(b"AAAA").unwrap();
    assert_eq!(codes, vec![65, 129, 65, EOF]);

    let mut decoder = LzwDecoder::new(LzwConfig::TEXT).unwrap();
    decoder.push_code(codes[0]).unwrap();
    // The second code names the slot the encoder just minted
    assert!(!decoder.is_assigned(codes[1]));
    assert_eq!(codes[1] as usize, decoder.next_code());

    assert_eq!(decoder.decode_codes(&codes).unwrap(), b"AAAA");
}

#[test]
fn test_lzw_long_runs() {
    for size in [1, 2, 3, 10, 100, 1000, 4095, 4096, 4097, 20000] {
        let original = vec![b'A'; size];
        let compressed = compress_text(&original).expect("compression failed");
        let decompressed = decompress_text(&compressed).expect("decompression failed");
        assert_eq!(decompressed.len(), size, "Size mismatch for run of {size}");
        assert_eq!(decompressed, original);
    }
}

#[test]
fn test_lzw_alternating_pattern_compresses() {
    let original = b"ABABABABAB";
    let mut encoder = LzwEncoder::new(LzwConfig::TEXT).unwrap();
    let codes = encoder.encode_codes(original).unwrap();

    // Codewords before EOF
    assert!(codes.len() - 1 < original.len());
    roundtrip(original);
}

#[test]
fn test_lzw_table_saturation() {
    // 60k characters over a 40-symbol alphabet fills all 4096 codes
    let alphabet: Vec<u8> = (b' '..b'H').collect();
    let original = random_text(60_000, &alphabet, 7);

    let mut encoder = LzwEncoder::new(LzwConfig::TEXT).unwrap();
    let codes = encoder.encode_codes(&original).unwrap();
    assert!(encoder.is_full());
    assert_eq!(encoder.next_code(), 4096);
    assert!(codes.iter().all(|&c| c < 4096));

    let mut decoder = LzwDecoder::new(LzwConfig::TEXT).unwrap();
    assert_eq!(decoder.decode_codes(&codes).unwrap(), original);
    assert_eq!(decoder.next_code(), 4096);

    roundtrip(&original);
}

#[test]
fn test_lzw_saturation_then_new_text() {
    // Fill the table with one vocabulary, then switch to another: the frozen
    // dictionary still covers every single character
    let mut original = random_text(50_000, b"abcdefghij", 1);
    original.extend(random_text(5_000, b"KLMNOPQRST\n", 2));
    roundtrip(&original);
}

#[test]
fn test_lzw_all_symbols() {
    let original: Vec<u8> = (0..128u8).cycle().take(1000).collect();
    roundtrip(&original);
}

#[test]
fn test_lzw_random_text_roundtrips() {
    for seed in 0..20 {
        let alphabet: Vec<u8> = (0..128).collect();
        let original = random_text(500 + seed as usize * 97, &alphabet, seed);
        roundtrip(&original);
    }
}

#[test]
fn test_lzw_rejects_non_ascii() {
    let err = compress_text("na\u{ef}ve".as_bytes()).unwrap_err();
    assert!(matches!(err, LzwError::InvalidSymbol { offset: 2, .. }));
}

#[test]
fn test_lzw_corrupted_code() {
    // Codes 65 and 1000: 1000 has not been assigned and is not next_code
    let mut writer = BitWriter::new(Vec::new());
    writer.write_bits(65, 12).unwrap();
    writer.write_bits(1000, 12).unwrap();
    writer.write_bits(EOF as u32, 12).unwrap();
    let corrupted = writer.into_inner().unwrap();

    assert!(matches!(
        decompress_text(&corrupted),
        Err(LzwError::InvalidCode {
            code: 1000,
            next_code: 129
        })
    ));
}

#[test]
fn test_lzw_truncated_stream() {
    let compressed = compress_text(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
    let truncated = &compressed[..compressed.len() - 2];
    assert!(matches!(
        decompress_text(truncated),
        Err(LzwError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_lzw_trailing_bytes_ignored() {
    let mut compressed = compress_text(b"hello").unwrap();
    compressed.extend_from_slice(&[0xFF, 0xFF]);
    assert_eq!(decompress_text(&compressed).unwrap(), b"hello");
}

#[test]
fn test_lzw_byte_alphabet() {
    let original: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    let compressed = compress(&original, LzwConfig::BYTES).unwrap();
    assert_eq!(decompress(&compressed, LzwConfig::BYTES).unwrap(), original);
}

#[test]
fn test_lzw_custom_code_width() {
    let config = LzwConfig::new(7, 16).unwrap();
    let original = random_text(100_000, b"etaoin shrdlu", 42);
    let compressed = compress(&original, config).unwrap();
    assert_eq!(decompress(&compressed, config).unwrap(), original);
}

#[test]
fn test_lzw_invalid_config() {
    assert!(matches!(
        LzwEncoder::new(LzwConfig {
            alphabet_bits: 7,
            code_bits: 6
        }),
        Err(LzwError::InvalidConfig { .. })
    ));
    assert!(LzwConfig::new(8, 17).is_err());
}

#[test]
fn test_compression_effectiveness() {
    let test_cases = vec![
        (b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".to_vec(), "all same"),
        (b"ABABABABABABABABABABABABABABAB".to_vec(), "alternating"),
        (
            b"This is a test. This is a test. This is a test. This is a test.".to_vec(),
            "repeated phrase",
        ),
    ];

    for (data, description) in test_cases {
        let compressed = compress_text(&data).expect("compression failed");

        println!(
            "{}: {} -> {} bytes ({:.1}%)",
            description,
            data.len(),
            compressed.len(),
            (compressed.len() as f64 / data.len() as f64) * 100.0
        );

        assert!(
            compressed.len() < data.len(),
            "{} should compress",
            description
        );

        let decompressed = decompress_text(&compressed).expect("decompression failed");
        assert_eq!(decompressed, data);
    }
}
