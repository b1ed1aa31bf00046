use hexasset::zlib::{self, ZlibError, ZlibParts};
use miniz_oxide::{deflate::compress_to_vec_zlib, inflate};

const TEXT: &[u8] = b"The quick brown fox jumps over the lazy dog. \
    The quick brown fox jumps over the lazy dog. The quick brown fox jumps over the lazy dog.";

#[test]
fn strips_header_and_trailer() {
    let body = [0x4b, 0x4c, 0x4a, 0x06, 0x00];
    let mut data = vec![0x78, 0x9c];
    data.extend_from_slice(&body);
    data.extend_from_slice(&[0x02, 0x4d, 0x01, 0x27]);

    assert_eq!(zlib::extract_raw(&data).unwrap(), body);
    assert_eq!(
        zlib::split(&data).unwrap(),
        ZlibParts {
            cmf: 0x78,
            flg: 0x9c,
            body: &body,
            adler32: 0x024d_0127,
        }
    );
}

#[test]
fn empty_body_is_allowed() {
    let data = [0x78, 0x9c, 0, 0, 0, 1];
    assert_eq!(zlib::extract_raw(&data).unwrap(), &[] as &[u8]);
}

#[test]
fn too_short() {
    for len in 0..=5 {
        let data = &[0x78u8, 0x9c, 0, 0, 0][..len];
        assert!(matches!(
            zlib::extract_raw(&data),
            Err(ZlibError::TooShort { len: l }) if l == data.len()
        ));
    }
}

#[test]
fn rejects_other_methods() {
    // CM = 15 is reserved
    let data = [0x7f, 0x9c, 1, 2, 3, 4, 5, 6];
    assert!(matches!(
        zlib::extract_raw(&data),
        Err(ZlibError::UnsupportedMethod { method: 15 })
    ));
}

#[test]
fn rejects_preset_dictionary() {
    let data = [0x78, 0xbb, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    assert!(matches!(
        zlib::extract_raw(&data),
        Err(ZlibError::PresetDictionary)
    ));
}

#[test]
fn matches_compressor_output() {
    let container = compress_to_vec_zlib(TEXT, 9);
    let raw = zlib::compress_raw(TEXT).unwrap();

    assert_eq!(raw, container[2..container.len() - 4]);
    assert_eq!(inflate::decompress_to_vec(&raw).unwrap(), TEXT);
}

#[test]
fn reattached_stream_inflates() {
    for input in [&b""[..], b"a", TEXT, &[0u8; 4096]] {
        let container = compress_to_vec_zlib(input, 9);
        let parts = zlib::split(&container).unwrap();
        let raw = zlib::compress_raw(input).unwrap();

        // any valid header works, the checksum is what the compressor produced
        let mut reframed = vec![0x78, 0x9c];
        reframed.extend_from_slice(&raw);
        reframed.extend_from_slice(&parts.adler32.to_be_bytes());

        assert_eq!(inflate::decompress_to_vec_zlib(&reframed).unwrap(), input);
    }
}
