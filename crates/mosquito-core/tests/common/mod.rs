// Recording fake of the audio output used by the tone and tracker tests.

#![allow(dead_code)]
use mosquito_core::{DeviceError, OutputDevice, WaveType};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Open,
    Create(WaveType),
    Retune(u32, u32),
    SetGain(u32, f32),
    Release(u32),
    Close,
}

#[derive(Default)]
pub struct Journal {
    pub calls: Vec<Call>,
    pub fail_open: bool,
    next_id: u32,
}

impl Journal {
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

/// Device handle shared with the test body so calls can be inspected after
/// the engine takes ownership.
#[derive(Clone, Default)]
pub struct FakeDevice {
    pub journal: Rc<RefCell<Journal>>,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let d = Self::default();
        d.journal.borrow_mut().fail_open = true;
        d
    }

    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().calls.clone()
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.journal.borrow_mut().fail_open = fail;
    }
}

impl OutputDevice for FakeDevice {
    type Tone = u32;

    fn open(&mut self) -> Result<(), DeviceError> {
        let mut j = self.journal.borrow_mut();
        j.calls.push(Call::Open);
        if j.fail_open {
            return Err(DeviceError::Unavailable("permission denied".into()));
        }
        Ok(())
    }

    fn create_tone_source(&mut self, wave: WaveType) -> Result<u32, DeviceError> {
        let mut j = self.journal.borrow_mut();
        j.next_id += 1;
        j.calls.push(Call::Create(wave));
        Ok(j.next_id)
    }

    fn retune(&mut self, tone: &u32, frequency_hz: u32) {
        self.journal
            .borrow_mut()
            .calls
            .push(Call::Retune(*tone, frequency_hz));
    }

    fn set_gain(&mut self, tone: &u32, level: f32) {
        self.journal.borrow_mut().calls.push(Call::SetGain(*tone, level));
    }

    fn stop_and_release(&mut self, tone: u32) {
        self.journal.borrow_mut().calls.push(Call::Release(tone));
    }

    fn close_device(&mut self) {
        self.journal.borrow_mut().calls.push(Call::Close);
    }
}
