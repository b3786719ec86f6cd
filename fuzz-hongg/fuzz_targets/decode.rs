use honggfuzz::fuzz;
use null_byte::{Byte, DriverValue, Scanner, Valuer};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let mut byte = Byte::Present(0x5a);
            if byte.unmarshal_json(data).is_ok() {
                let mut again = Byte::Unset;
                again.unmarshal_json(&byte.marshal_json()).unwrap();
                assert_eq!(again.get(), byte.get());
            } else {
                assert_eq!(byte, Byte::Present(0x5a));
            }

            if let Ok(byte) = serde_json::from_slice::<Byte>(data) {
                let _ = serde_json::to_vec(&byte);
            }

            let mut byte = Byte::Unset;
            match byte.unmarshal_text(data) {
                Ok(()) => assert_eq!(byte.marshal_text(), data),
                Err(_) => assert!(data.len() > 1 && byte.is_unset()),
            }

            let mut byte = Byte::Unset;
            byte.scan(DriverValue::Bytes(data.to_vec())).unwrap();
            assert_eq!(byte.get(), data.first().copied());
            let _ = byte.value();
        });
    }
}
