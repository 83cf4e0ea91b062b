//! Panel driver object and controller factory
//!
//! A [`TftLcd`] exists only for a supported controller: the factory
//! ([`TftLcd::spawn`]) maps a probed [`ControllerId`] to a
//! [`ControllerKind`] and refuses anything else, handing the bus back so
//! the application can carry on without a display.

use core::fmt;

use embedded_hal::delay::DelayNs;
use tftlcd_core::{
    ControllerId, ControllerKind, DriverConfig, DriverError, Geometry, Rgb565, TextState,
};
use tftlcd_hal::ParallelBus;

use crate::bus::BusContext;
use crate::controller::{run_init, PanelController};

/// Factory failure, carrying the bus back to the caller
pub struct SpawnError<B, D> {
    pub error: DriverError,
    pub bus: BusContext<B, D>,
}

impl<B, D> fmt::Debug for SpawnError<B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpawnError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<B, D> fmt::Display for SpawnError<B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

/// Driver for one 8-bit parallel TFT panel
pub struct TftLcd<B, D> {
    pub(crate) bus: BusContext<B, D>,
    pub(crate) kind: ControllerKind,
    pub(crate) id: ControllerId,
    pub(crate) geometry: Geometry,
    text: TextState,
}

impl<B, D> TftLcd<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    /// Detect the panel, build the driver and optionally run its init sequence
    pub fn new(bus: B, delay: D, config: DriverConfig) -> Result<Self, SpawnError<B, D>> {
        let ctx = BusContext::new(bus, delay, config.timing);
        let mut tft = Self::detect(ctx)?;
        if config.init_on_detect {
            tft.begin();
        }
        Ok(tft)
    }

    /// Reset and probe the panel, then spawn the matching driver
    pub fn detect(mut bus: BusContext<B, D>) -> Result<Self, SpawnError<B, D>> {
        let id = bus.read_id();
        Self::spawn(bus, id)
    }

    /// Build the driver for `id` without touching the bus
    pub fn spawn(bus: BusContext<B, D>, id: ControllerId) -> Result<Self, SpawnError<B, D>> {
        match ControllerKind::from_id(id) {
            Some(kind) => {
                info!("panel {} ({})", kind.name(), id);
                Ok(Self {
                    bus,
                    kind,
                    id,
                    geometry: kind.geometry(),
                    text: TextState::default(),
                })
            }
            None => {
                warn!("unsupported panel id {}", id);
                Err(SpawnError {
                    error: DriverError::UnsupportedPanel(id),
                    bus,
                })
            }
        }
    }

    /// Run the controller init sequence and open a full-panel window
    pub fn begin(&mut self) {
        info!("initializing {}", self.kind.name());
        run_init(&mut self.bus, self.kind.init_sequence());
        let full = self.geometry.full_window();
        self.kind.set_address_window(&mut self.bus, full);
        info!("{} ready", self.kind.name());
    }

    pub fn kind(&self) -> ControllerKind {
        self.kind
    }

    /// ID the panel reported
    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn width(&self) -> u16 {
        self.geometry.width
    }

    pub fn height(&self) -> u16 {
        self.geometry.height
    }

    pub fn set_display_on(&mut self, on: bool) {
        self.kind.set_display_on(&mut self.bus, on);
    }

    /// Invert colors; `false` restores the panel's normal image
    pub fn invert_display(&mut self, inverted: bool) {
        self.kind.set_inverted(&mut self.bus, inverted);
    }

    /// Diagnostic 16-bit register read
    pub fn read_register16(&mut self, addr: u16) -> u16 {
        self.bus.read_register16(addr)
    }

    /// Diagnostic 32-bit register read
    pub fn read_register32(&mut self, addr: u16) -> u32 {
        self.bus.read_register32(addr)
    }

    pub fn text(&self) -> &TextState {
        &self.text
    }

    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.text.set_cursor(x, y);
    }

    /// Text color with a transparent background
    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text.set_color(color);
    }

    pub fn set_text_colors(&mut self, color: Rgb565, background: Rgb565) {
        self.text.set_colors(color, background);
    }

    pub fn set_text_size(&mut self, size: u8) {
        self.text.set_size(size);
    }

    pub fn set_text_wrap(&mut self, wrap: bool) {
        self.text.set_wrap(wrap);
    }

    pub fn bus(&self) -> &BusContext<B, D> {
        &self.bus
    }

    /// Give the bus back
    pub fn release(self) -> BusContext<B, D> {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::reg;
    use crate::sim::{Dialect, SimDelay, SimPanel};
    use tftlcd_core::BusTiming;
    use tftlcd_hal::Line;

    fn ctx(sim: SimPanel) -> BusContext<SimPanel, SimDelay> {
        BusContext::new(sim, SimDelay::default(), BusTiming::zero())
    }

    #[test]
    fn test_spawn_known_id() {
        let tft = TftLcd::spawn(ctx(SimPanel::new()), ControllerId::ILI9341).unwrap();
        assert_eq!(tft.kind(), ControllerKind::Ili9341);
        assert_eq!(tft.id(), ControllerId::ILI9341);
        assert_eq!((tft.width(), tft.height()), (240, 320));
    }

    #[test]
    fn test_spawn_unknown_id_touches_nothing() {
        let bus = ctx(SimPanel::new());
        let err = TftLcd::spawn(bus, ControllerId(0x0000)).err().unwrap();

        assert_eq!(err.error, DriverError::UnsupportedPanel(ControllerId(0x0000)));
        let sim = err.bus.inner();
        assert!(sim.transfers().is_empty());
        assert_eq!(sim.transactions(), 0);
    }

    #[test]
    fn test_detect_st7789() {
        let mut sim = SimPanel::new();
        sim.respond(reg::STATUS, &[0xFF, 0x85, 0x85, 0x52]);
        let tft = TftLcd::detect(ctx(sim)).unwrap();
        assert_eq!(tft.kind(), ControllerKind::St7789);
    }

    #[test]
    fn test_new_runs_init() {
        let mut sim = SimPanel::with_dialect(Dialect::Ili932x, Geometry::new(240, 320));
        sim.respond(reg::LEGACY_ID, &[0x93, 0x28]);
        let config = DriverConfig {
            timing: BusTiming::zero(),
            init_on_detect: true,
        };
        let tft = TftLcd::new(sim, SimDelay::default(), config).unwrap();
        assert_eq!(tft.kind(), ControllerKind::Ili932x);

        let sim = tft.bus().inner();
        assert_eq!(sim.register(0x07), Some(&[0x01, 0x33][..]));
        assert_eq!(sim.window(), Geometry::new(240, 320).full_window());
        assert!(sim.line(Line::ChipSelect));
        assert!(sim.violations().is_empty());
    }

    #[test]
    fn test_new_unsupported_returns_bus() {
        let mut sim = SimPanel::new();
        sim.respond(reg::LEGACY_ID, &[0x12, 0x34]);
        let err = TftLcd::new(sim, SimDelay::default(), DriverConfig::default())
            .err()
            .unwrap();
        assert_eq!(err.error, DriverError::UnsupportedPanel(ControllerId(0x1234)));

        // Bus is usable again
        let (sim, _) = err.bus.release();
        assert!(sim.violations().is_empty());
    }

    #[test]
    fn test_text_state() {
        let mut tft = TftLcd::spawn(ctx(SimPanel::new()), ControllerId::ST7789).unwrap();
        tft.set_cursor(10, 20);
        tft.set_text_colors(Rgb565::YELLOW, Rgb565::BLACK);
        tft.set_text_size(2);
        tft.set_text_wrap(false);
        let t = tft.text();
        assert_eq!((t.cursor_x, t.cursor_y), (10, 20));
        assert_eq!(t.color, Rgb565::YELLOW);
        assert_eq!(t.size, 2);
        assert!(!t.wrap);
    }

    #[test]
    fn test_diagnostic_reads() {
        let mut sim = SimPanel::new();
        sim.respond(0x0A, &[0x9C, 0x00]);
        let mut tft = TftLcd::spawn(ctx(sim), ControllerId::ILI9341).unwrap();
        assert_eq!(tft.read_register16(0x0A), 0x9C00);
    }
}
