use intake_core::IntakeSettings;
use intake_core::question::QuestionBank;

pub fn run(settings: &IntakeSettings) {
    let bank = QuestionBank::with_custom(&settings.technologies);
    for tech in bank.supported_technologies() {
        println!("{}", tech);
    }
}
