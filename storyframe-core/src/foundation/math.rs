/// `src * a/255 + dst * (1 - a/255)`, rounded to nearest.
pub(crate) fn lerp_u8(dst: u8, src: u8, a: u8) -> u8 {
    let a = u32::from(a);
    let inv = 255 - a;
    (((u32::from(src) * a) + (u32::from(dst) * inv) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
