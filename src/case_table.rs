//! Simple one-to-one case mappings for the Basic Multilingual Plane and the
//! Supplementary Multilingual Plane.
//!
//! Generated from the Unicode 14.0 character database. Mappings that expand to more than
//! one codepoint (`ß` to `SS`, `ŉ` to `ʼN`, ...) are not part of these tables.

/// A run of codepoints sharing the same case delta.
///
/// `stride` is 1 for contiguous runs and 2 for the alternating upper/lower
/// layout used by Latin Extended-A, Cyrillic and friends.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaseRange {
    pub(crate) first: u32,
    pub(crate) last: u32,
    pub(crate) delta: i32,
    pub(crate) stride: u32,
}

impl CaseRange {
    const fn new(first: u32, last: u32, delta: i32, stride: u32) -> Self {
        CaseRange {
            first,
            last,
            delta,
            stride,
        }
    }
}

/// Lowercase (and titlecase) to uppercase runs, sorted by `first`.
pub(crate) static TO_UPPER: [CaseRange; 194] = [
    CaseRange::new(0x00061, 0x0007A, -32, 1),
    CaseRange::new(0x000B5, 0x000B5, 743, 1),
    CaseRange::new(0x000E0, 0x000F6, -32, 1),
    CaseRange::new(0x000F8, 0x000FE, -32, 1),
    CaseRange::new(0x000FF, 0x000FF, 121, 1),
    CaseRange::new(0x00101, 0x0012F, -1, 2),
    CaseRange::new(0x00131, 0x00131, -232, 1),
    CaseRange::new(0x00133, 0x00137, -1, 2),
    CaseRange::new(0x0013A, 0x00148, -1, 2),
    CaseRange::new(0x0014B, 0x00177, -1, 2),
    CaseRange::new(0x0017A, 0x0017E, -1, 2),
    CaseRange::new(0x0017F, 0x0017F, -300, 1),
    CaseRange::new(0x00180, 0x00180, 195, 1),
    CaseRange::new(0x00183, 0x00185, -1, 2),
    CaseRange::new(0x00188, 0x00188, -1, 1),
    CaseRange::new(0x0018C, 0x0018C, -1, 1),
    CaseRange::new(0x00192, 0x00192, -1, 1),
    CaseRange::new(0x00195, 0x00195, 97, 1),
    CaseRange::new(0x00199, 0x00199, -1, 1),
    CaseRange::new(0x0019A, 0x0019A, 163, 1),
    CaseRange::new(0x0019E, 0x0019E, 130, 1),
    CaseRange::new(0x001A1, 0x001A5, -1, 2),
    CaseRange::new(0x001A8, 0x001A8, -1, 1),
    CaseRange::new(0x001AD, 0x001AD, -1, 1),
    CaseRange::new(0x001B0, 0x001B0, -1, 1),
    CaseRange::new(0x001B4, 0x001B6, -1, 2),
    CaseRange::new(0x001B9, 0x001B9, -1, 1),
    CaseRange::new(0x001BD, 0x001BD, -1, 1),
    CaseRange::new(0x001BF, 0x001BF, 56, 1),
    CaseRange::new(0x001C5, 0x001C5, -1, 1),
    CaseRange::new(0x001C6, 0x001C6, -2, 1),
    CaseRange::new(0x001C8, 0x001C8, -1, 1),
    CaseRange::new(0x001C9, 0x001C9, -2, 1),
    CaseRange::new(0x001CB, 0x001CB, -1, 1),
    CaseRange::new(0x001CC, 0x001CC, -2, 1),
    CaseRange::new(0x001CE, 0x001DC, -1, 2),
    CaseRange::new(0x001DD, 0x001DD, -79, 1),
    CaseRange::new(0x001DF, 0x001EF, -1, 2),
    CaseRange::new(0x001F2, 0x001F2, -1, 1),
    CaseRange::new(0x001F3, 0x001F3, -2, 1),
    CaseRange::new(0x001F5, 0x001F5, -1, 1),
    CaseRange::new(0x001F9, 0x0021F, -1, 2),
    CaseRange::new(0x00223, 0x00233, -1, 2),
    CaseRange::new(0x0023C, 0x0023C, -1, 1),
    CaseRange::new(0x0023F, 0x00240, 10815, 1),
    CaseRange::new(0x00242, 0x00242, -1, 1),
    CaseRange::new(0x00247, 0x0024F, -1, 2),
    CaseRange::new(0x00250, 0x00250, 10783, 1),
    CaseRange::new(0x00251, 0x00251, 10780, 1),
    CaseRange::new(0x00252, 0x00252, 10782, 1),
    CaseRange::new(0x00253, 0x00253, -210, 1),
    CaseRange::new(0x00254, 0x00254, -206, 1),
    CaseRange::new(0x00256, 0x00257, -205, 1),
    CaseRange::new(0x00259, 0x00259, -202, 1),
    CaseRange::new(0x0025B, 0x0025B, -203, 1),
    CaseRange::new(0x0025C, 0x0025C, 42319, 1),
    CaseRange::new(0x00260, 0x00260, -205, 1),
    CaseRange::new(0x00261, 0x00261, 42315, 1),
    CaseRange::new(0x00263, 0x00263, -207, 1),
    CaseRange::new(0x00265, 0x00265, 42280, 1),
    CaseRange::new(0x00266, 0x00266, 42308, 1),
    CaseRange::new(0x00268, 0x00268, -209, 1),
    CaseRange::new(0x00269, 0x00269, -211, 1),
    CaseRange::new(0x0026A, 0x0026A, 42308, 1),
    CaseRange::new(0x0026B, 0x0026B, 10743, 1),
    CaseRange::new(0x0026C, 0x0026C, 42305, 1),
    CaseRange::new(0x0026F, 0x0026F, -211, 1),
    CaseRange::new(0x00271, 0x00271, 10749, 1),
    CaseRange::new(0x00272, 0x00272, -213, 1),
    CaseRange::new(0x00275, 0x00275, -214, 1),
    CaseRange::new(0x0027D, 0x0027D, 10727, 1),
    CaseRange::new(0x00280, 0x00280, -218, 1),
    CaseRange::new(0x00282, 0x00282, 42307, 1),
    CaseRange::new(0x00283, 0x00283, -218, 1),
    CaseRange::new(0x00287, 0x00287, 42282, 1),
    CaseRange::new(0x00288, 0x00288, -218, 1),
    CaseRange::new(0x00289, 0x00289, -69, 1),
    CaseRange::new(0x0028A, 0x0028B, -217, 1),
    CaseRange::new(0x0028C, 0x0028C, -71, 1),
    CaseRange::new(0x00292, 0x00292, -219, 1),
    CaseRange::new(0x0029D, 0x0029D, 42261, 1),
    CaseRange::new(0x0029E, 0x0029E, 42258, 1),
    CaseRange::new(0x00345, 0x00345, 84, 1),
    CaseRange::new(0x00371, 0x00373, -1, 2),
    CaseRange::new(0x00377, 0x00377, -1, 1),
    CaseRange::new(0x0037B, 0x0037D, 130, 1),
    CaseRange::new(0x003AC, 0x003AC, -38, 1),
    CaseRange::new(0x003AD, 0x003AF, -37, 1),
    CaseRange::new(0x003B1, 0x003C1, -32, 1),
    CaseRange::new(0x003C2, 0x003C2, -31, 1),
    CaseRange::new(0x003C3, 0x003CB, -32, 1),
    CaseRange::new(0x003CC, 0x003CC, -64, 1),
    CaseRange::new(0x003CD, 0x003CE, -63, 1),
    CaseRange::new(0x003D0, 0x003D0, -62, 1),
    CaseRange::new(0x003D1, 0x003D1, -57, 1),
    CaseRange::new(0x003D5, 0x003D5, -47, 1),
    CaseRange::new(0x003D6, 0x003D6, -54, 1),
    CaseRange::new(0x003D7, 0x003D7, -8, 1),
    CaseRange::new(0x003D9, 0x003EF, -1, 2),
    CaseRange::new(0x003F0, 0x003F0, -86, 1),
    CaseRange::new(0x003F1, 0x003F1, -80, 1),
    CaseRange::new(0x003F2, 0x003F2, 7, 1),
    CaseRange::new(0x003F3, 0x003F3, -116, 1),
    CaseRange::new(0x003F5, 0x003F5, -96, 1),
    CaseRange::new(0x003F8, 0x003F8, -1, 1),
    CaseRange::new(0x003FB, 0x003FB, -1, 1),
    CaseRange::new(0x00430, 0x0044F, -32, 1),
    CaseRange::new(0x00450, 0x0045F, -80, 1),
    CaseRange::new(0x00461, 0x00481, -1, 2),
    CaseRange::new(0x0048B, 0x004BF, -1, 2),
    CaseRange::new(0x004C2, 0x004CE, -1, 2),
    CaseRange::new(0x004CF, 0x004CF, -15, 1),
    CaseRange::new(0x004D1, 0x0052F, -1, 2),
    CaseRange::new(0x00561, 0x00586, -48, 1),
    CaseRange::new(0x010D0, 0x010FA, 3008, 1),
    CaseRange::new(0x010FD, 0x010FF, 3008, 1),
    CaseRange::new(0x013F8, 0x013FD, -8, 1),
    CaseRange::new(0x01C80, 0x01C80, -6254, 1),
    CaseRange::new(0x01C81, 0x01C81, -6253, 1),
    CaseRange::new(0x01C82, 0x01C82, -6244, 1),
    CaseRange::new(0x01C83, 0x01C84, -6242, 1),
    CaseRange::new(0x01C85, 0x01C85, -6243, 1),
    CaseRange::new(0x01C86, 0x01C86, -6236, 1),
    CaseRange::new(0x01C87, 0x01C87, -6181, 1),
    CaseRange::new(0x01C88, 0x01C88, 35266, 1),
    CaseRange::new(0x01D79, 0x01D79, 35332, 1),
    CaseRange::new(0x01D7D, 0x01D7D, 3814, 1),
    CaseRange::new(0x01D8E, 0x01D8E, 35384, 1),
    CaseRange::new(0x01E01, 0x01E95, -1, 2),
    CaseRange::new(0x01E9B, 0x01E9B, -59, 1),
    CaseRange::new(0x01EA1, 0x01EFF, -1, 2),
    CaseRange::new(0x01F00, 0x01F07, 8, 1),
    CaseRange::new(0x01F10, 0x01F15, 8, 1),
    CaseRange::new(0x01F20, 0x01F27, 8, 1),
    CaseRange::new(0x01F30, 0x01F37, 8, 1),
    CaseRange::new(0x01F40, 0x01F45, 8, 1),
    CaseRange::new(0x01F51, 0x01F57, 8, 2),
    CaseRange::new(0x01F60, 0x01F67, 8, 1),
    CaseRange::new(0x01F70, 0x01F71, 74, 1),
    CaseRange::new(0x01F72, 0x01F75, 86, 1),
    CaseRange::new(0x01F76, 0x01F77, 100, 1),
    CaseRange::new(0x01F78, 0x01F79, 128, 1),
    CaseRange::new(0x01F7A, 0x01F7B, 112, 1),
    CaseRange::new(0x01F7C, 0x01F7D, 126, 1),
    CaseRange::new(0x01FB0, 0x01FB1, 8, 1),
    CaseRange::new(0x01FBE, 0x01FBE, -7205, 1),
    CaseRange::new(0x01FD0, 0x01FD1, 8, 1),
    CaseRange::new(0x01FE0, 0x01FE1, 8, 1),
    CaseRange::new(0x01FE5, 0x01FE5, 7, 1),
    CaseRange::new(0x0214E, 0x0214E, -28, 1),
    CaseRange::new(0x02170, 0x0217F, -16, 1),
    CaseRange::new(0x02184, 0x02184, -1, 1),
    CaseRange::new(0x024D0, 0x024E9, -26, 1),
    CaseRange::new(0x02C30, 0x02C5F, -48, 1),
    CaseRange::new(0x02C61, 0x02C61, -1, 1),
    CaseRange::new(0x02C65, 0x02C65, -10795, 1),
    CaseRange::new(0x02C66, 0x02C66, -10792, 1),
    CaseRange::new(0x02C68, 0x02C6C, -1, 2),
    CaseRange::new(0x02C73, 0x02C73, -1, 1),
    CaseRange::new(0x02C76, 0x02C76, -1, 1),
    CaseRange::new(0x02C81, 0x02CE3, -1, 2),
    CaseRange::new(0x02CEC, 0x02CEE, -1, 2),
    CaseRange::new(0x02CF3, 0x02CF3, -1, 1),
    CaseRange::new(0x02D00, 0x02D25, -7264, 1),
    CaseRange::new(0x02D27, 0x02D27, -7264, 1),
    CaseRange::new(0x02D2D, 0x02D2D, -7264, 1),
    CaseRange::new(0x0A641, 0x0A66D, -1, 2),
    CaseRange::new(0x0A681, 0x0A69B, -1, 2),
    CaseRange::new(0x0A723, 0x0A72F, -1, 2),
    CaseRange::new(0x0A733, 0x0A76F, -1, 2),
    CaseRange::new(0x0A77A, 0x0A77C, -1, 2),
    CaseRange::new(0x0A77F, 0x0A787, -1, 2),
    CaseRange::new(0x0A78C, 0x0A78C, -1, 1),
    CaseRange::new(0x0A791, 0x0A793, -1, 2),
    CaseRange::new(0x0A794, 0x0A794, 48, 1),
    CaseRange::new(0x0A797, 0x0A7A9, -1, 2),
    CaseRange::new(0x0A7B5, 0x0A7C3, -1, 2),
    CaseRange::new(0x0A7C8, 0x0A7CA, -1, 2),
    CaseRange::new(0x0A7D1, 0x0A7D1, -1, 1),
    CaseRange::new(0x0A7D7, 0x0A7D9, -1, 2),
    CaseRange::new(0x0A7F6, 0x0A7F6, -1, 1),
    CaseRange::new(0x0AB53, 0x0AB53, -928, 1),
    CaseRange::new(0x0AB70, 0x0ABBF, -38864, 1),
    CaseRange::new(0x0FF41, 0x0FF5A, -32, 1),
    CaseRange::new(0x10428, 0x1044F, -40, 1),
    CaseRange::new(0x104D8, 0x104FB, -40, 1),
    CaseRange::new(0x10597, 0x105A1, -39, 1),
    CaseRange::new(0x105A3, 0x105B1, -39, 1),
    CaseRange::new(0x105B3, 0x105B9, -39, 1),
    CaseRange::new(0x105BB, 0x105BC, -39, 1),
    CaseRange::new(0x10CC0, 0x10CF2, -64, 1),
    CaseRange::new(0x118C0, 0x118DF, -32, 1),
    CaseRange::new(0x16E60, 0x16E7F, -32, 1),
    CaseRange::new(0x1E922, 0x1E943, -34, 1),
];

/// Uppercase (and titlecase) to lowercase runs, sorted by `first`.
pub(crate) static TO_LOWER: [CaseRange; 181] = [
    CaseRange::new(0x00041, 0x0005A, 32, 1),
    CaseRange::new(0x000C0, 0x000D6, 32, 1),
    CaseRange::new(0x000D8, 0x000DE, 32, 1),
    CaseRange::new(0x00100, 0x0012E, 1, 2),
    CaseRange::new(0x00132, 0x00136, 1, 2),
    CaseRange::new(0x00139, 0x00147, 1, 2),
    CaseRange::new(0x0014A, 0x00176, 1, 2),
    CaseRange::new(0x00178, 0x00178, -121, 1),
    CaseRange::new(0x00179, 0x0017D, 1, 2),
    CaseRange::new(0x00181, 0x00181, 210, 1),
    CaseRange::new(0x00182, 0x00184, 1, 2),
    CaseRange::new(0x00186, 0x00186, 206, 1),
    CaseRange::new(0x00187, 0x00187, 1, 1),
    CaseRange::new(0x00189, 0x0018A, 205, 1),
    CaseRange::new(0x0018B, 0x0018B, 1, 1),
    CaseRange::new(0x0018E, 0x0018E, 79, 1),
    CaseRange::new(0x0018F, 0x0018F, 202, 1),
    CaseRange::new(0x00190, 0x00190, 203, 1),
    CaseRange::new(0x00191, 0x00191, 1, 1),
    CaseRange::new(0x00193, 0x00193, 205, 1),
    CaseRange::new(0x00194, 0x00194, 207, 1),
    CaseRange::new(0x00196, 0x00196, 211, 1),
    CaseRange::new(0x00197, 0x00197, 209, 1),
    CaseRange::new(0x00198, 0x00198, 1, 1),
    CaseRange::new(0x0019C, 0x0019C, 211, 1),
    CaseRange::new(0x0019D, 0x0019D, 213, 1),
    CaseRange::new(0x0019F, 0x0019F, 214, 1),
    CaseRange::new(0x001A0, 0x001A4, 1, 2),
    CaseRange::new(0x001A6, 0x001A6, 218, 1),
    CaseRange::new(0x001A7, 0x001A7, 1, 1),
    CaseRange::new(0x001A9, 0x001A9, 218, 1),
    CaseRange::new(0x001AC, 0x001AC, 1, 1),
    CaseRange::new(0x001AE, 0x001AE, 218, 1),
    CaseRange::new(0x001AF, 0x001AF, 1, 1),
    CaseRange::new(0x001B1, 0x001B2, 217, 1),
    CaseRange::new(0x001B3, 0x001B5, 1, 2),
    CaseRange::new(0x001B7, 0x001B7, 219, 1),
    CaseRange::new(0x001B8, 0x001B8, 1, 1),
    CaseRange::new(0x001BC, 0x001BC, 1, 1),
    CaseRange::new(0x001C4, 0x001C4, 2, 1),
    CaseRange::new(0x001C5, 0x001C5, 1, 1),
    CaseRange::new(0x001C7, 0x001C7, 2, 1),
    CaseRange::new(0x001C8, 0x001C8, 1, 1),
    CaseRange::new(0x001CA, 0x001CA, 2, 1),
    CaseRange::new(0x001CB, 0x001DB, 1, 2),
    CaseRange::new(0x001DE, 0x001EE, 1, 2),
    CaseRange::new(0x001F1, 0x001F1, 2, 1),
    CaseRange::new(0x001F2, 0x001F4, 1, 2),
    CaseRange::new(0x001F6, 0x001F6, -97, 1),
    CaseRange::new(0x001F7, 0x001F7, -56, 1),
    CaseRange::new(0x001F8, 0x0021E, 1, 2),
    CaseRange::new(0x00220, 0x00220, -130, 1),
    CaseRange::new(0x00222, 0x00232, 1, 2),
    CaseRange::new(0x0023A, 0x0023A, 10795, 1),
    CaseRange::new(0x0023B, 0x0023B, 1, 1),
    CaseRange::new(0x0023D, 0x0023D, -163, 1),
    CaseRange::new(0x0023E, 0x0023E, 10792, 1),
    CaseRange::new(0x00241, 0x00241, 1, 1),
    CaseRange::new(0x00243, 0x00243, -195, 1),
    CaseRange::new(0x00244, 0x00244, 69, 1),
    CaseRange::new(0x00245, 0x00245, 71, 1),
    CaseRange::new(0x00246, 0x0024E, 1, 2),
    CaseRange::new(0x00370, 0x00372, 1, 2),
    CaseRange::new(0x00376, 0x00376, 1, 1),
    CaseRange::new(0x0037F, 0x0037F, 116, 1),
    CaseRange::new(0x00386, 0x00386, 38, 1),
    CaseRange::new(0x00388, 0x0038A, 37, 1),
    CaseRange::new(0x0038C, 0x0038C, 64, 1),
    CaseRange::new(0x0038E, 0x0038F, 63, 1),
    CaseRange::new(0x00391, 0x003A1, 32, 1),
    CaseRange::new(0x003A3, 0x003AB, 32, 1),
    CaseRange::new(0x003CF, 0x003CF, 8, 1),
    CaseRange::new(0x003D8, 0x003EE, 1, 2),
    CaseRange::new(0x003F4, 0x003F4, -60, 1),
    CaseRange::new(0x003F7, 0x003F7, 1, 1),
    CaseRange::new(0x003F9, 0x003F9, -7, 1),
    CaseRange::new(0x003FA, 0x003FA, 1, 1),
    CaseRange::new(0x003FD, 0x003FF, -130, 1),
    CaseRange::new(0x00400, 0x0040F, 80, 1),
    CaseRange::new(0x00410, 0x0042F, 32, 1),
    CaseRange::new(0x00460, 0x00480, 1, 2),
    CaseRange::new(0x0048A, 0x004BE, 1, 2),
    CaseRange::new(0x004C0, 0x004C0, 15, 1),
    CaseRange::new(0x004C1, 0x004CD, 1, 2),
    CaseRange::new(0x004D0, 0x0052E, 1, 2),
    CaseRange::new(0x00531, 0x00556, 48, 1),
    CaseRange::new(0x010A0, 0x010C5, 7264, 1),
    CaseRange::new(0x010C7, 0x010C7, 7264, 1),
    CaseRange::new(0x010CD, 0x010CD, 7264, 1),
    CaseRange::new(0x013A0, 0x013EF, 38864, 1),
    CaseRange::new(0x013F0, 0x013F5, 8, 1),
    CaseRange::new(0x01C90, 0x01CBA, -3008, 1),
    CaseRange::new(0x01CBD, 0x01CBF, -3008, 1),
    CaseRange::new(0x01E00, 0x01E94, 1, 2),
    CaseRange::new(0x01E9E, 0x01E9E, -7615, 1),
    CaseRange::new(0x01EA0, 0x01EFE, 1, 2),
    CaseRange::new(0x01F08, 0x01F0F, -8, 1),
    CaseRange::new(0x01F18, 0x01F1D, -8, 1),
    CaseRange::new(0x01F28, 0x01F2F, -8, 1),
    CaseRange::new(0x01F38, 0x01F3F, -8, 1),
    CaseRange::new(0x01F48, 0x01F4D, -8, 1),
    CaseRange::new(0x01F59, 0x01F5F, -8, 2),
    CaseRange::new(0x01F68, 0x01F6F, -8, 1),
    CaseRange::new(0x01F88, 0x01F8F, -8, 1),
    CaseRange::new(0x01F98, 0x01F9F, -8, 1),
    CaseRange::new(0x01FA8, 0x01FAF, -8, 1),
    CaseRange::new(0x01FB8, 0x01FB9, -8, 1),
    CaseRange::new(0x01FBA, 0x01FBB, -74, 1),
    CaseRange::new(0x01FBC, 0x01FBC, -9, 1),
    CaseRange::new(0x01FC8, 0x01FCB, -86, 1),
    CaseRange::new(0x01FCC, 0x01FCC, -9, 1),
    CaseRange::new(0x01FD8, 0x01FD9, -8, 1),
    CaseRange::new(0x01FDA, 0x01FDB, -100, 1),
    CaseRange::new(0x01FE8, 0x01FE9, -8, 1),
    CaseRange::new(0x01FEA, 0x01FEB, -112, 1),
    CaseRange::new(0x01FEC, 0x01FEC, -7, 1),
    CaseRange::new(0x01FF8, 0x01FF9, -128, 1),
    CaseRange::new(0x01FFA, 0x01FFB, -126, 1),
    CaseRange::new(0x01FFC, 0x01FFC, -9, 1),
    CaseRange::new(0x02126, 0x02126, -7517, 1),
    CaseRange::new(0x0212A, 0x0212A, -8383, 1),
    CaseRange::new(0x0212B, 0x0212B, -8262, 1),
    CaseRange::new(0x02132, 0x02132, 28, 1),
    CaseRange::new(0x02160, 0x0216F, 16, 1),
    CaseRange::new(0x02183, 0x02183, 1, 1),
    CaseRange::new(0x024B6, 0x024CF, 26, 1),
    CaseRange::new(0x02C00, 0x02C2F, 48, 1),
    CaseRange::new(0x02C60, 0x02C60, 1, 1),
    CaseRange::new(0x02C62, 0x02C62, -10743, 1),
    CaseRange::new(0x02C63, 0x02C63, -3814, 1),
    CaseRange::new(0x02C64, 0x02C64, -10727, 1),
    CaseRange::new(0x02C67, 0x02C6B, 1, 2),
    CaseRange::new(0x02C6D, 0x02C6D, -10780, 1),
    CaseRange::new(0x02C6E, 0x02C6E, -10749, 1),
    CaseRange::new(0x02C6F, 0x02C6F, -10783, 1),
    CaseRange::new(0x02C70, 0x02C70, -10782, 1),
    CaseRange::new(0x02C72, 0x02C72, 1, 1),
    CaseRange::new(0x02C75, 0x02C75, 1, 1),
    CaseRange::new(0x02C7E, 0x02C7F, -10815, 1),
    CaseRange::new(0x02C80, 0x02CE2, 1, 2),
    CaseRange::new(0x02CEB, 0x02CED, 1, 2),
    CaseRange::new(0x02CF2, 0x02CF2, 1, 1),
    CaseRange::new(0x0A640, 0x0A66C, 1, 2),
    CaseRange::new(0x0A680, 0x0A69A, 1, 2),
    CaseRange::new(0x0A722, 0x0A72E, 1, 2),
    CaseRange::new(0x0A732, 0x0A76E, 1, 2),
    CaseRange::new(0x0A779, 0x0A77B, 1, 2),
    CaseRange::new(0x0A77D, 0x0A77D, -35332, 1),
    CaseRange::new(0x0A77E, 0x0A786, 1, 2),
    CaseRange::new(0x0A78B, 0x0A78B, 1, 1),
    CaseRange::new(0x0A78D, 0x0A78D, -42280, 1),
    CaseRange::new(0x0A790, 0x0A792, 1, 2),
    CaseRange::new(0x0A796, 0x0A7A8, 1, 2),
    CaseRange::new(0x0A7AA, 0x0A7AA, -42308, 1),
    CaseRange::new(0x0A7AB, 0x0A7AB, -42319, 1),
    CaseRange::new(0x0A7AC, 0x0A7AC, -42315, 1),
    CaseRange::new(0x0A7AD, 0x0A7AD, -42305, 1),
    CaseRange::new(0x0A7AE, 0x0A7AE, -42308, 1),
    CaseRange::new(0x0A7B0, 0x0A7B0, -42258, 1),
    CaseRange::new(0x0A7B1, 0x0A7B1, -42282, 1),
    CaseRange::new(0x0A7B2, 0x0A7B2, -42261, 1),
    CaseRange::new(0x0A7B3, 0x0A7B3, 928, 1),
    CaseRange::new(0x0A7B4, 0x0A7C2, 1, 2),
    CaseRange::new(0x0A7C4, 0x0A7C4, -48, 1),
    CaseRange::new(0x0A7C5, 0x0A7C5, -42307, 1),
    CaseRange::new(0x0A7C6, 0x0A7C6, -35384, 1),
    CaseRange::new(0x0A7C7, 0x0A7C9, 1, 2),
    CaseRange::new(0x0A7D0, 0x0A7D0, 1, 1),
    CaseRange::new(0x0A7D6, 0x0A7D8, 1, 2),
    CaseRange::new(0x0A7F5, 0x0A7F5, 1, 1),
    CaseRange::new(0x0FF21, 0x0FF3A, 32, 1),
    CaseRange::new(0x10400, 0x10427, 40, 1),
    CaseRange::new(0x104B0, 0x104D3, 40, 1),
    CaseRange::new(0x10570, 0x1057A, 39, 1),
    CaseRange::new(0x1057C, 0x1058A, 39, 1),
    CaseRange::new(0x1058C, 0x10592, 39, 1),
    CaseRange::new(0x10594, 0x10595, 39, 1),
    CaseRange::new(0x10C80, 0x10CB2, 64, 1),
    CaseRange::new(0x118A0, 0x118BF, 32, 1),
    CaseRange::new(0x16E40, 0x16E5F, 32, 1),
    CaseRange::new(0x1E900, 0x1E921, 34, 1),
];
