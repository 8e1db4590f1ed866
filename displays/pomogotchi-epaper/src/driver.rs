//! Driver for the 2.13" 122x250 e-paper panel

use pomogotchi_core::display::{Snapshot, PANEL_HEIGHT, PANEL_WIDTH, ROW_BYTES};
use pomogotchi_core::traits::{DisplayTransport, TransportError};
use pomogotchi_hal::spi::{Mode, SpiConfig};
use pomogotchi_hal::{Clock, InputPin, OutputPin, SpiBus};

use crate::cmd::{Cmd, Flag};

/// SPI settings the panel accepts
pub const SPI_CONFIG: SpiConfig = SpiConfig {
    frequency: 4_000_000,
    mode: Mode::Mode0,
};

/// Last gate line, low byte then bit 8
const GATE_END: [u8; 2] = [((PANEL_HEIGHT - 1) & 0xFF) as u8, ((PANEL_HEIGHT - 1) >> 8) as u8];

/// Last RAM column, in bytes
const RAM_X_END: u8 = ((PANEL_WIDTH - 1) / 8) as u8;

/// Power-on sequence for the panel
pub const INIT_SEQUENCE: &[InitStep] = &[
    // Supply settle
    InitStep::DelayMs(10),
    InitStep::HwReset,
    InitStep::WaitUntilIdle,
    InitStep::Cmd(Cmd::SW_RESET),
    InitStep::WaitUntilIdle,
    InitStep::DelayMs(10),
    // 250 gate lines, gate 0 first, sequential
    InitStep::CmdData(Cmd::DRIVER_OUTPUT_CTRL, &[GATE_END[0], GATE_END[1], 0x00]),
    InitStep::CmdData(Cmd::DATA_ENTRY_MODE, &[Flag::DATA_ENTRY_XY_INCREMENT]),
    InitStep::CmdData(Cmd::SET_RAMXPOS, &[0x00, RAM_X_END]),
    InitStep::CmdData(Cmd::SET_RAMYPOS, &[0x00, 0x00, GATE_END[0], GATE_END[1]]),
    InitStep::CmdData(Cmd::SET_RAMX_COUNTER, &[0x00]),
    InitStep::CmdData(Cmd::SET_RAMY_COUNTER, &[0x00, 0x00]),
    InitStep::CmdData(Cmd::BORDER_WAVEFORM_CTRL, &[Flag::BORDER_WAVEFORM_WHITE]),
    // Normal RAM content, source output S8..S167
    InitStep::CmdData(Cmd::DISPLAY_UPDATE_CTRL1, &[0x00, 0x80]),
    InitStep::CmdData(Cmd::TEMP_CONTROL, &[Flag::INTERNAL_TEMP_SENSOR]),
    InitStep::WaitUntilIdle,
];

/// One step of a panel init sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// Pulse the RST line
    HwReset,
    /// Wait a fixed time
    DelayMs(u8),
    /// Wait for BUSY to drop
    WaitUntilIdle,
    /// Send a bare command byte
    Cmd(u8),
    /// Send a command followed by its data bytes
    CmdData(u8, &'static [u8]),
}

/// Fill color for whole-panel writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// RAM byte for eight pixels of this color
    pub fn byte(self) -> u8 {
        match self {
            Color::White => 0xFF,
            Color::Black => 0x00,
        }
    }
}

/// Panel timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EpaperConfig {
    /// Longest wait for BUSY to drop before giving up (ms)
    pub busy_timeout_ms: u32,
    /// Sleep between BUSY polls (ms)
    pub poll_interval_ms: u32,
    /// Width of each RST phase (ms)
    pub reset_pulse_ms: u32,
}

impl Default for EpaperConfig {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 10_000,
            poll_interval_ms: 1,
            reset_pulse_ms: 2,
        }
    }
}

/// 2.13" e-paper panel on a 4-wire SPI interface
pub struct Epd2in13<SPI, DC, CS, RST, BUSY, CLK> {
    spi: SPI,
    /// Data/command select, low = command
    dc: DC,
    /// Chip select, active low
    cs: CS,
    /// Reset, active low
    rst: RST,
    /// High while the controller is working
    busy: BUSY,
    clock: CLK,
    config: EpaperConfig,
}

impl<SPI, DC, CS, RST, BUSY, CLK> Epd2in13<SPI, DC, CS, RST, BUSY, CLK>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    CLK: Clock,
{
    /// Create the driver with CS deselected and RST released
    ///
    /// The panel is not touched until [`init`](Self::init).
    pub fn new(
        spi: SPI,
        dc: DC,
        cs: CS,
        rst: RST,
        busy: BUSY,
        clock: CLK,
        config: EpaperConfig,
    ) -> Self {
        let mut epd = Self {
            spi,
            dc,
            cs,
            rst,
            busy,
            clock,
            config,
        };
        epd.cs.set_high();
        epd.rst.set_high();
        epd
    }

    /// Run [`INIT_SEQUENCE`]
    pub fn init(&mut self) -> Result<(), TransportError> {
        self.run_sequence(INIT_SEQUENCE)
    }

    /// Run a custom init sequence
    pub fn run_sequence(&mut self, steps: &[InitStep]) -> Result<(), TransportError> {
        for step in steps {
            match *step {
                InitStep::HwReset => self.hw_reset(),
                InitStep::DelayMs(ms) => self.clock.delay_ms(u32::from(ms)),
                InitStep::WaitUntilIdle => self.wait_until_idle()?,
                InitStep::Cmd(c) => self.command(c)?,
                InitStep::CmdData(c, data) => self.command_with_data(c, data)?,
            }
        }
        Ok(())
    }

    /// Pulse RST low
    pub fn hw_reset(&mut self) {
        let pulse = self.config.reset_pulse_ms;
        self.rst.set_high();
        self.clock.delay_ms(pulse);
        self.rst.set_low();
        self.clock.delay_ms(pulse);
        self.rst.set_high();
        self.clock.delay_ms(pulse);
    }

    /// Paint the whole panel one color and refresh
    pub fn fill(&mut self, color: Color) -> Result<(), TransportError> {
        let row = [color.byte(); ROW_BYTES];
        self.begin_ram_write()?;
        self.data_frame(|epd| {
            for _ in 0..PANEL_HEIGHT {
                epd.write(&row)?;
            }
            Ok(())
        })?;
        self.update()
    }

    /// Write a frame (text half, then image half) and refresh
    pub fn write_frame(&mut self, frame: &Snapshot<'_>) -> Result<(), TransportError> {
        self.begin_ram_write()?;
        self.data_frame(|epd| {
            for row in frame.rows() {
                epd.write(row)?;
            }
            Ok(())
        })?;
        self.update()
    }

    /// Latch panel RAM to the glass and wait for the refresh to finish
    pub fn update(&mut self) -> Result<(), TransportError> {
        self.command_with_data(Cmd::DISPLAY_UPDATE_CTRL2, &[Flag::DISPLAY_MODE_FULL])?;
        self.command(Cmd::MASTER_ACTIVATE)?;
        self.wait_until_idle()
    }

    /// Poll BUSY until it drops or the timeout expires
    pub fn wait_until_idle(&mut self) -> Result<(), TransportError> {
        let start = self.clock.now_ms();
        while self.busy.is_high() {
            if self.clock.elapsed_since(start) >= self.config.busy_timeout_ms {
                return Err(TransportError::Timeout);
            }
            self.clock.delay_ms(self.config.poll_interval_ms);
        }
        Ok(())
    }

    /// Check if the controller reports busy
    pub fn is_busy(&self) -> bool {
        self.busy.is_high()
    }

    /// Get the timing configuration
    pub fn config(&self) -> &EpaperConfig {
        &self.config
    }

    /// Wait for idle, rewind the RAM address counters and open a RAM write
    fn begin_ram_write(&mut self) -> Result<(), TransportError> {
        self.wait_until_idle()?;
        self.command_with_data(Cmd::SET_RAMX_COUNTER, &[0x00])?;
        self.command_with_data(Cmd::SET_RAMY_COUNTER, &[0x00, 0x00])?;
        self.command(Cmd::WRITE_BW_DATA)
    }

    fn command(&mut self, command: u8) -> Result<(), TransportError> {
        self.dc.set_low();
        self.cs.set_low();
        let result = self.write(&[command]);
        self.cs.set_high();
        result
    }

    fn command_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), TransportError> {
        self.command(command)?;
        self.data_frame(|epd| epd.write(data))
    }

    /// Run `f` with DC high and CS asserted, releasing CS afterwards
    fn data_frame<F>(&mut self, f: F) -> Result<(), TransportError>
    where
        F: FnOnce(&mut Self) -> Result<(), TransportError>,
    {
        self.dc.set_high();
        self.cs.set_low();
        let result = f(self);
        self.cs.set_high();
        result
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.spi.write(bytes).map_err(|_| TransportError::Bus)
    }
}

impl<SPI, DC, CS, RST, BUSY, CLK> DisplayTransport for Epd2in13<SPI, DC, CS, RST, BUSY, CLK>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    CLK: Clock,
{
    fn commit(&mut self, frame: &Snapshot<'_>) -> Result<(), TransportError> {
        self.write_frame(frame)
    }

    fn fill_white(&mut self) -> Result<(), TransportError> {
        self.fill(Color::White)
    }
}
