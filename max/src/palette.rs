use crate::constants::PALETTE_COLORS;

/// The built-in colormap the game ships for graphics that do not embed one.
///
/// Simple and Multi files carry no palette of their own; every palette index
/// in those files resolves through this table. Entry 0 doubles as the
/// transparency key when frames are composited.
pub static DEFAULT_PALETTE: [[u8; 3]; PALETTE_COLORS] = [
    [255, 0, 255], [252, 0, 0], [0, 252, 0], [0, 0, 252],
    [252, 252, 0], [252, 168, 0], [128, 128, 160], [252, 68, 0],
    [252, 252, 144], [168, 168, 224], [96, 88, 220], [168, 168, 224],
    [200, 200, 252], [240, 168, 100], [252, 252, 156], [240, 168, 100],
    [232, 48, 48], [40, 60, 72], [20, 96, 132], [40, 60, 72],
    [12, 12, 12], [72, 56, 36], [180, 100, 0], [72, 56, 36],
    [12, 12, 12], [12, 12, 12], [24, 24, 24], [40, 40, 40],
    [52, 52, 52], [68, 64, 64], [84, 80, 80], [0, 252, 0],
    [128, 184, 24], [108, 168, 12], [92, 156, 8], [76, 144, 4],
    [64, 116, 4], [48, 92, 4], [36, 64, 4], [24, 40, 4],
    [184, 184, 4], [176, 132, 4], [168, 84, 4], [160, 44, 4],
    [252, 252, 252], [100, 4, 120], [120, 52, 4], [144, 184, 12],
    [104, 156, 184], [68, 132, 168], [44, 112, 148], [20, 96, 132],
    [12, 76, 108], [8, 56, 84], [4, 40, 64], [4, 24, 40],
    [184, 120, 84], [172, 96, 52], [160, 76, 24], [148, 56, 4],
    [120, 44, 4], [96, 36, 4], [68, 24, 4], [36, 12, 4],
    [220, 116, 48], [204, 112, 48], [216, 104, 44], [204, 104, 44],
    [196, 104, 48], [188, 104, 48], [188, 104, 40], [196, 96, 48],
    [196, 100, 40], [188, 96, 48], [188, 96, 40], [180, 96, 48],
    [180, 96, 40], [172, 96, 40], [192, 88, 40], [180, 88, 40],
    [172, 88, 48], [172, 88, 40], [164, 88, 40], [180, 80, 36],
    [172, 76, 36], [164, 80, 40], [164, 80, 32], [156, 80, 40],
    [156, 80, 32], [144, 80, 40], [164, 72, 32], [156, 72, 40],
    [156, 72, 32], [144, 72, 40], [148, 72, 32], [156, 64, 32],
    [120, 136, 188], [116, 136, 184], [120, 136, 188], [120, 140, 192],
    [124, 144, 196], [128, 148, 200], [120, 140, 192], [116, 128, 180],
    [116, 132, 184], [120, 136, 188], [120, 140, 192], [124, 144, 196],
    [128, 148, 200], [120, 140, 192], [108, 124, 160], [104, 116, 144],
    [108, 124, 160], [112, 128, 176], [116, 136, 192], [120, 140, 208],
    [112, 128, 176], [172, 88, 40], [172, 88, 40], [132, 152, 92],
    [128, 148, 196], [100, 160, 156], [180, 140, 72], [128, 136, 180],
    [136, 148, 188], [160, 160, 200], [140, 140, 184], [120, 128, 172],
    [228, 196, 136], [232, 192, 128], [236, 192, 120], [240, 188, 112],
    [244, 188, 104], [248, 184, 96], [252, 180, 88], [240, 176, 92],
    [232, 172, 96], [220, 168, 100], [208, 164, 100], [200, 156, 104],
    [188, 152, 104], [180, 148, 104], [168, 140, 104], [160, 136, 104],
    [144, 120, 88], [132, 104, 72], [120, 92, 60], [108, 80, 48],
    [96, 68, 40], [76, 72, 68], [68, 72, 72], [104, 52, 8],
    [52, 60, 72], [12, 76, 104], [72, 56, 36], [76, 40, 8],
    [44, 36, 32], [52, 28, 8], [36, 20, 4], [20, 12, 0],
    [252, 248, 244], [240, 220, 208], [240, 216, 184], [220, 196, 172],
    [220, 192, 152], [216, 180, 140], [196, 164, 124], [180, 160, 128],
    [168, 152, 120], [156, 148, 136], [172, 164, 144], [188, 168, 148],
    [196, 184, 172], [204, 160, 104], [188, 152, 100], [168, 136, 92],
    [160, 136, 104], [152, 132, 96], [144, 132, 112], [128, 124, 116],
    [120, 112, 100], [128, 112, 88], [136, 120, 96], [144, 116, 80],
    [156, 124, 72], [168, 128, 72], [176, 136, 80], [192, 144, 80],
    [196, 136, 64], [176, 124, 56], [164, 112, 52], [144, 108, 56],
    [128, 104, 56], [120, 96, 68], [112, 96, 56], [112, 84, 40],
    [100, 80, 44], [88, 76, 56], [80, 68, 48], [80, 60, 40],
    [72, 56, 36], [64, 56, 40], [56, 48, 36], [48, 40, 28],
    [40, 36, 32], [36, 32, 28], [28, 24, 20], [12, 12, 12],
    [52, 28, 28], [44, 40, 40], [52, 48, 48], [60, 56, 56],
    [72, 68, 68], [84, 80, 80], [92, 88, 88], [100, 96, 96],
    [108, 104, 104], [112, 100, 80], [104, 92, 72], [96, 84, 64],
    [84, 64, 32], [72, 40, 40], [44, 40, 56], [128, 96, 40],
    [128, 104, 72], [204, 128, 104], [168, 108, 88], [184, 80, 52],
    [120, 76, 64], [152, 60, 44], [112, 36, 32], [72, 28, 20],
    [28, 12, 12], [136, 168, 96], [112, 144, 76], [84, 144, 56],
    [92, 112, 64], [64, 104, 44], [56, 80, 32], [40, 64, 24],
    [20, 24, 12], [116, 108, 156], [96, 84, 128], [56, 64, 136],
    [64, 64, 104], [44, 48, 104], [64, 56, 76], [28, 32, 72],
    [12, 16, 40], [180, 100, 0], [132, 72, 0], [88, 48, 0],
    [152, 152, 0], [108, 108, 0], [64, 64, 0], [252, 252, 252],
];
