use esp_idf_hal::gpio::{Input, InputPin, PinDriver};

use crate::ports::PowerProbe;

pub struct PinProbe<'d, P: InputPin> {
    pin: PinDriver<'d, P, Input>,
}

impl<'d, P: InputPin> PinProbe<'d, P> {
    pub fn new(pin: PinDriver<'d, P, Input>) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> PowerProbe for PinProbe<'_, P> {
    fn power_present(&mut self) -> bool {
        self.pin.is_high()
    }
}
