//! Panel controller command set

pub struct Cmd;

#[allow(dead_code)]
impl Cmd {
    pub const DRIVER_OUTPUT_CTRL: u8 = 0x01;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SW_RESET: u8 = 0x12;
    pub const TEMP_CONTROL: u8 = 0x18;
    pub const MASTER_ACTIVATE: u8 = 0x20;
    pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;
    pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;
    pub const WRITE_BW_DATA: u8 = 0x24;
    pub const BORDER_WAVEFORM_CTRL: u8 = 0x3C;
    pub const SET_RAMXPOS: u8 = 0x44;
    pub const SET_RAMYPOS: u8 = 0x45;
    pub const SET_RAMX_COUNTER: u8 = 0x4E;
    pub const SET_RAMY_COUNTER: u8 = 0x4F;
}

/// Data bytes for command arguments
pub struct Flag;

impl Flag {
    /// Clock on, load temperature and waveform, display, clock off
    pub const DISPLAY_MODE_FULL: u8 = 0xF7;
    /// Border follows the LUT for white
    pub const BORDER_WAVEFORM_WHITE: u8 = 0x05;
    /// Use the internal temperature sensor
    pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;
    /// X and Y increment, address counter moves along X
    pub const DATA_ENTRY_XY_INCREMENT: u8 = 0x03;
}
