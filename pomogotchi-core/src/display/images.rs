//! Pre-rendered tamagotchi frames
//!
//! Each frame fills the whole image region. The source art is a 24x24 grid
//! (`#` is ink, anything else is white) scaled 4x and centred, rendered at
//! compile time.

use super::{HALF_BYTES, HALF_ROWS, PANEL_WIDTH, ROW_BYTES, WHITE};

/// Art grid side length
const ART_SIZE: usize = 24;

/// Pixels per art cell
const ART_SCALE: usize = 4;

/// Left margin of the scaled art
const ART_X: usize = (PANEL_WIDTH - ART_SIZE * ART_SCALE) / 2;

/// Top margin of the scaled art
const ART_Y: usize = (HALF_ROWS - ART_SIZE * ART_SCALE) / 2;

/// One image-region frame, row-major, panel polarity
pub type Frame = [u8; HALF_BYTES];

type Art = [&'static str; ART_SIZE];

/// Tamagotchi moods, one per screen the device can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tamagotchi {
    /// Monkey at work (focus)
    Focused,
    /// Monkey with a drink (short rest)
    Drinking,
    /// Monkey asleep (long rest)
    Sleeping,
    /// No tamagotchi (suspended)
    Empty,
}

impl Tamagotchi {
    /// Frame bitmap for this mood
    pub fn frame(&self) -> &'static Frame {
        match self {
            Tamagotchi::Focused => &FOCUSED,
            Tamagotchi::Drinking => &DRINKING,
            Tamagotchi::Sleeping => &SLEEPING,
            Tamagotchi::Empty => &EMPTY,
        }
    }
}

static FOCUSED: Frame = render(&FOCUSED_ART);
static DRINKING: Frame = render(&DRINKING_ART);
static SLEEPING: Frame = render(&SLEEPING_ART);
static EMPTY: Frame = [WHITE; HALF_BYTES];

const fn render(art: &Art) -> Frame {
    let mut frame = [WHITE; HALF_BYTES];
    let mut row = 0;
    while row < ART_SIZE {
        let line = art[row].as_bytes();
        let mut col = 0;
        while col < ART_SIZE && col < line.len() {
            if line[col] == b'#' {
                let mut dy = 0;
                while dy < ART_SCALE {
                    let y = ART_Y + row * ART_SCALE + dy;
                    let mut dx = 0;
                    while dx < ART_SCALE {
                        let x = ART_X + col * ART_SCALE + dx;
                        frame[y * ROW_BYTES + x / 8] &= !(0x80 >> (x % 8));
                        dx += 1;
                    }
                    dy += 1;
                }
            }
            col += 1;
        }
        row += 1;
    }
    frame
}

const FOCUSED_ART: Art = [
    "                        ",
    "       ##########       ",
    "     ##############     ",
    "    ################    ",
    " ###################### ",
    "##  ##............##  ##",
    "#  #................#  #",
    "#  #..####....####..#  #",
    " ###................### ",
    "   #...##......##...#   ",
    "   #...##......##...#   ",
    "   #................#   ",
    "    #..............#    ",
    "    #.....#..#.....#    ",
    "    #..............#    ",
    "     #...######...#     ",
    "      #..........#      ",
    "       ##########       ",
    "         ######         ",
    "       ##########       ",
    "      ############      ",
    "     ##############     ",
    "    ################    ",
    "                        ",
];

const DRINKING_ART: Art = [
    "                        ",
    "       ##########       ",
    "     ##############     ",
    "    ################    ",
    " ###################### ",
    "##  ##............##  ##",
    "#  #................#  #",
    "#  #................#  #",
    " ###..##........##..### ",
    "   #.#..#......#..#.#   ",
    "   #................#   ",
    "   #................#   ",
    "    #.....#..#.....#    ",
    "    #..............#    ",
    "    #...#......#...#    ",
    "     #...######...#     ",
    "      #..........#      ",
    "       ########## ##### ",
    "         ######   #...##",
    "       ########## #...# ",
    "      #############...##",
    "     ##############...# ",
    "    ################### ",
    "                        ",
];

const SLEEPING_ART: Art = [
    "                    ### ",
    "       ##########     # ",
    "     ##############  #  ",
    "    ################### ",
    " ###################### ",
    "##  ##............##  ##",
    "#  #................#  #",
    "#  #................#  #",
    " ###................### ",
    "   #..####....####..#   ",
    "   #................#   ",
    "   #................#   ",
    "    #.....#..#.....#    ",
    "    #..............#    ",
    "    #..............#    ",
    "     #....####....#     ",
    "      #..........#      ",
    "       ##########       ",
    "         ######         ",
    "   ##################   ",
    "  ####################  ",
    " ###################### ",
    "########################",
    "                        ",
];
#[cfg(test)]
mod tests {
    use super::*;

    fn ink_pixels(frame: &Frame) -> u32 {
        frame.iter().map(|b| (!b).count_ones()).sum()
    }

    fn art_cells(art: &Art) -> u32 {
        art.iter()
            .map(|line| line.bytes().filter(|&b| b == b'#').count() as u32)
            .sum()
    }

    #[test]
    fn test_art_is_square() {
        for art in [&FOCUSED_ART, &DRINKING_ART, &SLEEPING_ART] {
            for line in art.iter() {
                assert_eq!(line.len(), ART_SIZE);
            }
        }
    }

    #[test]
    fn test_scaled_ink_matches_art() {
        let scale = (ART_SCALE * ART_SCALE) as u32;
        assert_eq!(ink_pixels(Tamagotchi::Focused.frame()), art_cells(&FOCUSED_ART) * scale);
        assert_eq!(ink_pixels(Tamagotchi::Drinking.frame()), art_cells(&DRINKING_ART) * scale);
        assert_eq!(ink_pixels(Tamagotchi::Sleeping.frame()), art_cells(&SLEEPING_ART) * scale);
    }

    #[test]
    fn test_empty_frame_is_white() {
        assert_eq!(ink_pixels(Tamagotchi::Empty.frame()), 0);
    }

    #[test]
    fn test_padding_bits_stay_white() {
        // Columns 122..128 exist in RAM but not on glass
        for frame in [&FOCUSED, &DRINKING, &SLEEPING] {
            for row in frame.chunks(ROW_BYTES) {
                assert_eq!(row[ROW_BYTES - 1] & 0x3F, 0x3F);
            }
        }
    }

    #[test]
    fn test_moods_differ() {
        assert_ne!(Tamagotchi::Focused.frame(), Tamagotchi::Sleeping.frame());
        assert_ne!(Tamagotchi::Drinking.frame(), Tamagotchi::Sleeping.frame());
    }
}
