/// Number of LEDs wired to the expander, split across both banks.
pub const LED_COUNT: usize = 12;

/// Number of LEDs driven by a single bank (bits 0..=5).
pub const LEDS_PER_BANK: u8 = 6;

/// Highest LED index accepted by the driver. Indices above [`LED_COUNT`]
/// address bank-B bits that are not wired on the 12-LED board.
pub const MAX_LED_INDEX: u8 = 16;

/// The six addressable registers used by the driver, with their byte
/// addresses on the wire (IOCON.BANK = 0 register layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Bank A data direction register.
    IodirA = 0x00,
    /// Bank B data direction register.
    IodirB = 0x01,
    /// Bank A pull-up enable register.
    GppuA = 0x0c,
    /// Bank B pull-up enable register.
    GppuB = 0x0d,
    /// Bank A output data register.
    GpioA = 0x12,
    /// Bank B output data register.
    GpioB = 0x13,
}

impl Register {
    pub const fn address(self) -> u8 {
        self as u8
    }
}

/// 7-bit device address, selected by the chip's A0..A2 pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Address {
    #[default]
    A20 = 0x20,
    A21 = 0x21,
    A22 = 0x22,
    A23 = 0x23,
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address as u8
    }
}

/// One of the two 8-bit I/O banks of the expander.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    A,
    B,
}

impl Bank {
    /// The output data register of this bank.
    pub const fn data_register(self) -> Register {
        match self {
            Bank::A => Register::GpioA,
            Bank::B => Register::GpioB,
        }
    }

    /// The data direction register of this bank.
    pub const fn direction_register(self) -> Register {
        match self {
            Bank::A => Register::IodirA,
            Bank::B => Register::IodirB,
        }
    }

    /// The pull-up enable register of this bank.
    pub const fn pull_up_register(self) -> Register {
        match self {
            Bank::A => Register::GppuA,
            Bank::B => Register::GppuB,
        }
    }
}
