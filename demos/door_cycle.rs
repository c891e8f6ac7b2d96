//! Door actuation example.
//!
//! Demonstrates wiring a sequencer from configuration and running a
//! sensor-guarded rotation, mirroring an automated door controller.
//!
//! This example uses hand-rolled mock pins so it runs without real
//! hardware; on a target board the platform HAL supplies the pins named in
//! the configuration.

use stepper_sequencer::{
    Degrees, Direction, RotationRegistry, RotationRequest, Rpm, Seconds,
    StepSequencerBuilder, StopReason,
};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would use a hardware timer
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

/// Mock door contact that opens after a number of samples.
struct MockContact {
    samples_until_open: u32,
}

impl stepper_sequencer::Interrupt for MockContact {
    fn is_tripped(&mut self) -> stepper_sequencer::Result<bool> {
        if self.samples_until_open == 0 {
            Ok(true)
        } else {
            self.samples_until_open -= 1;
            Ok(false)
        }
    }
}

fn main() {
    println!("=== Door Cycle Example ===\n");

    let toml_content = r#"
[motors.door]
name = "door"
in1 = 12
in2 = 16
in3 = 20
in4 = 21

[sensor]
pin = 17

[rotations.close]
motor = "door"
angle_degrees = 2.0
rpm = 18.0
direction = "counter_clockwise"
time_limit_secs = 30.0
use_sensor = true
"#;

    let config: stepper_sequencer::SystemConfig =
        stepper_sequencer::parse_config(toml_content).expect("Failed to parse config");

    let motor_config = config.motor("door").expect("door motor configured");
    println!(
        "Motor '{}' on lines {:?}, sensor on line {}",
        motor_config.name,
        motor_config.output_lines(),
        config.sensor.expect("sensor configured").pin,
    );

    // On real hardware the platform layer turns those line numbers into
    // concrete pins; here they become mocks.
    let mut motor = StepSequencerBuilder::new()
        .from_config(&config, "door")
        .expect("door motor exists")
        .in1(MockPin::new())
        .in2(MockPin::new())
        .in3(MockPin::new())
        .in4(MockPin::new())
        .delay(MockDelay)
        .build()
        .expect("Failed to build sequencer");

    println!("Sequencer ready, phase index {}", motor.phase_index());

    // Direct request: a short clockwise nudge
    let nudge = RotationRequest::new(Direction::Clockwise)
        .angle(Degrees(1.0))
        .rpm(Rpm(18.0))
        .time_limit(Seconds(5.0));

    let reason = motor.rotate(&nudge, None, None).expect("nudge failed");
    println!(
        "Nudge stopped: {} (phase index now {})",
        reason,
        motor.phase_index()
    );

    // Named preset with the door contact armed: the contact "opens" after
    // six samples and aborts the close early.
    let registry = RotationRegistry::from_config(&config);
    let mut contact = MockContact {
        samples_until_open: 6,
    };

    let reason = motor
        .execute("close", &registry, Some(&mut contact), None)
        .expect("close failed");
    println!("Close stopped: {}", reason);
    assert_eq!(reason, StopReason::SensorTripped);

    // Always leave the coil lines inactive
    motor.cleanup().expect("cleanup failed");
    println!("\nLines driven inactive. Done.");
}
