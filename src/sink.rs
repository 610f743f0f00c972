use super::*;

/// Append-only destination for encoded bytes.
///
/// Implementors only provide `write_byte` and `write_bytes`. Every other
/// write is expressed in terms of those two, so a sink that streams to a file
/// or merely counts bytes behaves identically to the in-memory one.
pub trait Sink {
    fn write_byte(&mut self, b: u8);

    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_u32(&mut self, x: u32) {
        leb128::write_unsigned(self, u64::from(x));
    }

    fn write_u64(&mut self, x: u64) {
        leb128::write_unsigned(self, x);
    }

    fn write_i32(&mut self, x: i32) {
        leb128::write_signed(self, i64::from(x));
    }

    fn write_i64(&mut self, x: i64) {
        leb128::write_signed(self, x);
    }

    fn write_f32(&mut self, x: f32) {
        self.write_bytes(&x.to_bits().to_le_bytes());
    }

    fn write_f64(&mut self, x: f64) {
        self.write_bytes(&x.to_bits().to_le_bytes());
    }

    fn write_v128(&mut self, x: [u8; 16]) {
        self.write_bytes(&x);
    }

    fn write_index(&mut self, x: u32) {
        self.write_u32(x);
    }

    /// Writes a byte length or element count. The format caps these at
    /// `u32`; a larger value is written at full width, which decoders reject,
    /// instead of being wrapped.
    fn write_len(&mut self, len: usize) {
        self.write_u64(len as u64);
    }

    fn write_name(&mut self, name: &str) {
        self.write_len(name.len());
        self.write_bytes(name.as_bytes());
    }

    fn write_bool(&mut self, b: bool) {
        match b {
            false => self.write_byte(0x00),
            true => self.write_byte(0x01),
        }
    }

    fn write_mem_arg(&mut self, align: u32, offset: u32) {
        self.write_u32(align);
        self.write_u32(offset);
    }
}

impl Sink for Vec<u8> {
    fn write_byte(&mut self, b: u8) {
        self.push(b);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// A sink that only counts how many bytes would have been written.
#[derive(Default, Debug)]
pub struct ByteCounter {
    count: usize,
}

impl ByteCounter {
    pub fn new() -> ByteCounter {
        ByteCounter { count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn measure<T: Encode + ?Sized>(value: &T) -> usize {
        let mut counter = ByteCounter::new();
        value.encode(&mut counter);
        counter.count
    }
}

impl Sink for ByteCounter {
    fn write_byte(&mut self, _b: u8) {
        self.count += 1;
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.count += bytes.len();
    }

    fn write_u32(&mut self, x: u32) {
        self.count += leb128::unsigned_size(u64::from(x));
    }

    fn write_u64(&mut self, x: u64) {
        self.count += leb128::unsigned_size(x);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn typed_helpers() {
        let mut w: Vec<u8> = Vec::new();
        w.write_bool(true);
        w.write_bool(false);
        w.write_mem_arg(2, 300);
        w.write_index(128);
        w.write_v128([0xab; 16]);
        assert_eq!(&w[..7], &[0x01, 0x00, 0x02, 0xac, 0x02, 0x80, 0x01]);
        assert_eq!(&w[7..], &[0xab; 16][..]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_lengths_are_not_wrapped() {
        let mut w: Vec<u8> = Vec::new();
        w.write_len(1 << 32);
        assert_eq!(w, vec![0x80, 0x80, 0x80, 0x80, 0x10]);

        let mut counter = ByteCounter::new();
        counter.write_len(1 << 32);
        assert_eq!(counter.count(), 5);
    }

    #[test]
    fn counter_agrees_with_buffer() {
        let values: Vec<i64> = vec![0, -1, 1 << 40, i64::min_value()];
        let bytes = values.to_bytes();
        assert_eq!(ByteCounter::measure(&values[..]), bytes.len());

        let mut counter = ByteCounter::new();
        counter.write_name("memory");
        counter.write_f64(0.5);
        counter.write_u64(u64::max_value());
        assert_eq!(counter.count(), 7 + 8 + 10);
    }
}
