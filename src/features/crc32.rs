//! Table-driven CRC-32 (IEEE 802.3, reflected polynomial 0xEDB88320).

use std::sync::OnceLock;

const POLYNOMIAL: u32 = 0xEDB8_8320;

static TABLE: OnceLock<[u32; 256]> = OnceLock::new();

fn table() -> &'static [u32; 256] {
    TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut crc = i as u32;
            for _ in 0..8 {
                crc = if crc & 1 == 1 {
                    POLYNOMIAL ^ (crc >> 1)
                } else {
                    crc >> 1
                };
            }
            *entry = crc;
        }
        table
    })
}

pub fn checksum(data: &[u8]) -> u32 {
    let table = table();
    let crc = data.iter().fold(0xFFFF_FFFFu32, |crc, &byte| {
        (crc >> 8) ^ table[((crc ^ u32::from(byte)) & 0xFF) as usize]
    });
    !crc
}

/// Lowercase hex without leading zeros; the empty input gives `0`.
pub fn checksum_hex(data: &[u8]) -> String {
    format!("{:x}", checksum(data))
}
