/// The enabled hardware device list, supplied by the surrounding editor's
/// hardware-configuration screen.
///
/// Declaration order is preserved verbatim so the generated preamble stays
/// byte-stable across compiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardwareConfig {
    pub motors: Vec<String>,
    pub servos: Vec<String>,
}

impl HardwareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motor(mut self, name: impl Into<String>) -> Self {
        self.motors.push(name.into());
        self
    }

    pub fn servo(mut self, name: impl Into<String>) -> Self {
        self.servos.push(name.into());
        self
    }

    pub fn has_motor(&self, name: &str) -> bool {
        self.motors.iter().any(|m| m == name)
    }

    pub fn has_servo(&self, name: &str) -> bool {
        self.servos.iter().any(|s| s == name)
    }

    pub fn is_empty(&self) -> bool {
        self.motors.is_empty() && self.servos.is_empty()
    }

    /// Field declarations for the class body, one per enabled device.
    pub(super) fn declarations(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.motors.len() + self.servos.len());
        for motor in &self.motors {
            lines.push(format!("private DcMotor {motor};"));
        }
        for servo in &self.servos {
            lines.push(format!("private Servo {servo};"));
        }
        lines
    }

    /// Hardware-map lookups run at the top of the op mode.
    pub(super) fn initializers(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.motors.len() + self.servos.len());
        for motor in &self.motors {
            lines.push(format!("{motor} = hardwareMap.get(DcMotor.class, \"{motor}\");"));
        }
        for servo in &self.servos {
            lines.push(format!("{servo} = hardwareMap.get(Servo.class, \"{servo}\");"));
        }
        lines
    }
}
