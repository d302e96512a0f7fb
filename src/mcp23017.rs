use crate::config::*;
use crate::state::State;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mcp23017Error {
    DeviceError,
}

pub trait Mode {}

#[derive(Debug)]
pub struct Async;
#[derive(Debug)]
pub struct Blocking;

impl Mode for Async {}
impl Mode for Blocking {}

/// Commanded state of an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    Off,
    On,
}

pub struct Mcp23017Leds<BUS, M: Mode> {
    bus: BUS,
    address: u8,
    state: State,
    _phantom: core::marker::PhantomData<M>,
}

// General implementation
impl<BUS, M: Mode> Mcp23017Leds<BUS, M> {
    /// Create a new driver for 12 LEDs behind an MCP23017
    /// # Arguments
    /// * `bus` - The I2C bus to use
    /// * `address` - The device address of the expander
    ///
    /// # Returns
    /// A new driver
    pub fn new(bus: BUS, address: Address) -> Self {
        Self {
            bus,
            address: address.into(),
            state: State::default(),
            _phantom: core::marker::PhantomData,
        }
    }

    pub fn into_inner(self) -> BUS {
        self.bus
    }

    pub fn inner(&self) -> &BUS {
        &self.bus
    }

    pub fn inner_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// The cached output byte of a bank, equal to the last value written
    /// to the device for that bank.
    pub fn bank(&self, bank: Bank) -> u8 {
        self.state.bank(bank)
    }
}

/// Maps an LED index to its bank and bit position. Indices 1..=6 live on
/// bank A, 7..=14 on bank B. Returns `None` for indices outside 1..=16
/// and for 15 and 16, which have no backing bit in an 8-bit bank.
fn led_target(index: u8) -> Option<(Bank, u8)> {
    if index < 1 || index > MAX_LED_INDEX {
        return None;
    }
    let (bank, position) = if index <= LEDS_PER_BANK {
        (Bank::A, index - 1)
    } else {
        (Bank::B, index - LEDS_PER_BANK - 1)
    };
    if position >= 8 {
        return None;
    }
    Some((bank, position))
}

/// Number of LEDs lit for a bar-graph value: the linear map of `value`
/// from [0, max] onto [0, 12], truncated toward zero.
fn bar_led_count(value: u16, max: u16) -> u8 {
    (u32::from(value) * LED_COUNT as u32 / u32::from(max)) as u8
}

impl<BUS: embedded_hal::i2c::I2c> Mcp23017Leds<BUS, Blocking> {
    pub fn new_blocking(bus: BUS, address: Address) -> Self {
        Self {
            bus,
            address: address.into(),
            state: State::default(),
            _phantom: core::marker::PhantomData,
        }
    }

    fn write(&mut self, register: Register, data: &[u8]) -> Result<(), BUS::Error> {
        self.bus.transaction(
            self.address,
            &mut [
                embedded_hal::i2c::Operation::Write(&[register.address()]),
                embedded_hal::i2c::Operation::Write(data),
            ],
        )?;

        Ok(())
    }

    fn write_register(
        &mut self,
        register: Register,
        data: u8,
    ) -> Result<(), Mcp23017Error> {
        self.write(register, &[data])
            .map_err(|_| Mcp23017Error::DeviceError)
    }

    /// Initialize the expander for LED output
    ///
    /// Configures both banks as outputs, enables the pull-up resistors on
    /// both banks and forces all LEDs off. Must run before any LED
    /// operation.
    ///
    /// # Returns
    /// * Ok(()) if every configuration write succeeded
    pub fn initialize(&mut self) -> Result<(), Mcp23017Error> {
        self.write_register(Bank::A.direction_register(), 0x00)?;
        self.write_register(Bank::B.direction_register(), 0x00)?;
        // Pull-ups keep the lines clean between transitions
        self.write_register(Bank::A.pull_up_register(), 0xff)?;
        self.write_register(Bank::B.pull_up_register(), 0xff)?;
        self.set_all_leds(LedState::Off)
    }

    /// Turn a single LED on or off
    ///
    /// Turning a LED on always writes the owning bank's updated byte, even
    /// when the bit was already set. Turning it off writes only when the
    /// bit was set; a second `Off` is a pure no-op. At most one register is
    /// written per call and the other bank is never touched.
    ///
    /// # Arguments
    /// * `index` - The LED index, 1..=12 on the 12-LED board
    /// * `state` - The desired LED state
    ///
    /// # Returns
    /// * Ok(true) if a bus write was issued
    /// * Ok(false) if the call was ignored (index without a backing output
    ///   bit, or the LED was already off)
    pub fn set_led(
        &mut self,
        index: u8,
        state: LedState,
    ) -> Result<bool, Mcp23017Error> {
        let (bank, position) = match led_target(index) {
            Some(target) => target,
            None => return Ok(false),
        };

        let current = self.state.bank(bank);
        let mask = 1u8 << position;

        let updated = match state {
            LedState::On => current | mask,
            LedState::Off => {
                if current & mask == 0 {
                    return Ok(false);
                }
                current ^ mask
            }
        };

        self.write_register(bank.data_register(), updated)?;
        self.state.set_bank(bank, updated);

        Ok(true)
    }

    /// Turn all 12 LEDs on or off, in ascending index order. Each LED is
    /// set individually, so this issues up to 12 bus writes.
    pub fn set_all_leds(&mut self, state: LedState) -> Result<(), Mcp23017Error> {
        for index in 1..=LED_COUNT as u8 {
            self.set_led(index, state)?;
        }

        Ok(())
    }

    /// Display a value as a bar graph on the 12 LEDs
    ///
    /// All LEDs are cleared first. When `value > max` or `max == 0` no bar
    /// is drawn. Otherwise `value` is mapped linearly from [0, max] onto
    /// [0, 12] and that many LEDs are lit from LED 1 upward.
    ///
    /// # Arguments
    /// * `value` - The value to display
    /// * `max` - The full-scale value (1023 for a 10-bit analog reading)
    ///
    /// # Returns
    /// * Ok(()) if every write succeeded
    pub fn plot_bar_graph(
        &mut self,
        value: u16,
        max: u16,
    ) -> Result<(), Mcp23017Error> {
        self.set_all_leds(LedState::Off)?;

        if value > max || max == 0 {
            return Ok(());
        }

        for index in 1..=bar_led_count(value, max) {
            self.set_led(index, LedState::On)?;
        }

        Ok(())
    }

    /// Show a 12-pixel pattern on the LEDs
    ///
    /// Every LED is re-asserted: a set pixel turns its LED on, a clear
    /// pixel turns it off. Repeated calls with the same pattern keep
    /// rewriting the lit LEDs while the off LEDs stay silent.
    ///
    /// # Arguments
    /// * `pixels` - One value per LED, pixel 0 driving LED 1
    pub fn display_pattern(
        &mut self,
        pixels: &[bool; LED_COUNT],
    ) -> Result<(), Mcp23017Error> {
        for (column, pixel) in pixels.iter().enumerate() {
            let state = if *pixel { LedState::On } else { LedState::Off };
            self.set_led(column as u8 + 1, state)?;
        }

        Ok(())
    }
}

impl<BUS: embedded_hal_async::i2c::I2c> Mcp23017Leds<BUS, Async> {
    pub fn new_async(bus: BUS, address: Address) -> Self {
        Self {
            bus,
            address: address.into(),
            state: State::default(),
            _phantom: core::marker::PhantomData,
        }
    }

    async fn write(
        &mut self,
        register: Register,
        data: &[u8],
    ) -> Result<(), BUS::Error> {
        self.bus
            .transaction(
                self.address,
                &mut [
                    embedded_hal_async::i2c::Operation::Write(&[register.address()]),
                    embedded_hal_async::i2c::Operation::Write(data),
                ],
            )
            .await?;

        Ok(())
    }

    async fn write_register(
        &mut self,
        register: Register,
        data: u8,
    ) -> Result<(), Mcp23017Error> {
        self.write(register, &[data])
            .await
            .map_err(|_| Mcp23017Error::DeviceError)
    }

    /// Initialize the expander for LED output
    ///
    /// Configures both banks as outputs, enables the pull-up resistors on
    /// both banks and forces all LEDs off. Must run before any LED
    /// operation.
    ///
    /// # Returns
    /// * Ok(()) if every configuration write succeeded
    pub async fn initialize(&mut self) -> Result<(), Mcp23017Error> {
        self.write_register(Bank::A.direction_register(), 0x00).await?;
        self.write_register(Bank::B.direction_register(), 0x00).await?;
        // Pull-ups keep the lines clean between transitions
        self.write_register(Bank::A.pull_up_register(), 0xff).await?;
        self.write_register(Bank::B.pull_up_register(), 0xff).await?;
        self.set_all_leds(LedState::Off).await
    }

    /// Turn a single LED on or off
    ///
    /// Same contract as the blocking variant: `On` always writes the
    /// owning bank's updated byte, `Off` writes only when the bit was set,
    /// and at most one register is written per call.
    ///
    /// # Arguments
    /// * `index` - The LED index, 1..=12 on the 12-LED board
    /// * `state` - The desired LED state
    ///
    /// # Returns
    /// * Ok(true) if a bus write was issued
    /// * Ok(false) if the call was ignored
    pub async fn set_led(
        &mut self,
        index: u8,
        state: LedState,
    ) -> Result<bool, Mcp23017Error> {
        let (bank, position) = match led_target(index) {
            Some(target) => target,
            None => return Ok(false),
        };

        let current = self.state.bank(bank);
        let mask = 1u8 << position;

        let updated = match state {
            LedState::On => current | mask,
            LedState::Off => {
                if current & mask == 0 {
                    return Ok(false);
                }
                current ^ mask
            }
        };

        self.write_register(bank.data_register(), updated).await?;
        self.state.set_bank(bank, updated);

        Ok(true)
    }

    /// Turn all 12 LEDs on or off, in ascending index order.
    pub async fn set_all_leds(
        &mut self,
        state: LedState,
    ) -> Result<(), Mcp23017Error> {
        for index in 1..=LED_COUNT as u8 {
            self.set_led(index, state).await?;
        }

        Ok(())
    }

    /// Display a value as a bar graph on the 12 LEDs
    ///
    /// Same contract as the blocking variant: clear everything, guard
    /// against `value > max` and `max == 0`, then light the linearly
    /// mapped LED count from LED 1 upward.
    pub async fn plot_bar_graph(
        &mut self,
        value: u16,
        max: u16,
    ) -> Result<(), Mcp23017Error> {
        self.set_all_leds(LedState::Off).await?;

        if value > max || max == 0 {
            return Ok(());
        }

        for index in 1..=bar_led_count(value, max) {
            self.set_led(index, LedState::On).await?;
        }

        Ok(())
    }

    /// Show a 12-pixel pattern on the LEDs, re-asserting every LED.
    pub async fn display_pattern(
        &mut self,
        pixels: &[bool; LED_COUNT],
    ) -> Result<(), Mcp23017Error> {
        for (column, pixel) in pixels.iter().enumerate() {
            let state = if *pixel { LedState::On } else { LedState::Off };
            self.set_led(column as u8 + 1, state).await?;
        }

        Ok(())
    }
}
