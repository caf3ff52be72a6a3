//! Command registry.
//!
//! Single source of truth mapping every console command name to its wire
//! request and, where the reply packs binary fields, a response decoder.
//! The table is fixed at compile time and read-only; its order drives
//! completion.
//!
//! Names not found here are forwarded to the device verbatim, which keeps
//! undocumented registers reachable from the console.

use crate::protocol::{decode, Decoder, Request};

/// One console-visible command.
pub struct CommandEntry {
    /// Canonical name, matched case-sensitively against the typed line.
    pub name: &'static str,
    /// Wire request this command issues.
    pub request: Request,
    /// Reply decoder; `None` displays the raw response.
    pub decode: Option<Decoder>,
}

const fn get(name: &'static str, addr: u16) -> CommandEntry {
    CommandEntry {
        name,
        request: Request::Get(addr),
        decode: None,
    }
}

const fn get_decoded(name: &'static str, addr: u16, decode: Decoder) -> CommandEntry {
    CommandEntry {
        name,
        request: Request::Get(addr),
        decode: Some(decode),
    }
}

const fn set(name: &'static str, addr: u16) -> CommandEntry {
    CommandEntry {
        name,
        request: Request::Set(addr),
        decode: None,
    }
}

const fn lightbar(name: &'static str, offsets: &'static [u8]) -> CommandEntry {
    CommandEntry {
        name,
        request: Request::LightbarRead(offsets),
        decode: None,
    }
}

const fn lightbar_decoded(
    name: &'static str,
    offsets: &'static [u8],
    decode: Decoder,
) -> CommandEntry {
    CommandEntry {
        name,
        request: Request::LightbarRead(offsets),
        decode: Some(decode),
    }
}

const fn action(name: &'static str, wire: &'static str) -> CommandEntry {
    CommandEntry {
        name,
        request: Request::Action(wire),
        decode: None,
    }
}

/// Full command vocabulary, in completion order.
pub static COMMANDS: &[CommandEntry] = &[
    // PMU register commands
    get_decoded("get firmwareVersion", 0x0000, decode::firmware_version),
    get("get productCode", 0x0001),
    set("set productCode", 0x0001),
    get("get serialNumber", 0x0002),
    set("set serialNumber", 0x0002),
    get("get unixTime", 0x0003),
    set("set unixTime", 0x0003),
    get_decoded("get temperature", 0x0004, decode::temperature),
    get("get lightManualLevel", 0x0005),
    set("set lightManualLevel", 0x0005),
    get("get lightActiveLevel", 0x0006),
    get("get lightInactiveLevel", 0x0007),
    get("get lightOverrideActiveLevel", 0x0008),
    set("set lightOverrideActiveLevel", 0x0008),
    get("get lightOverrideInactiveLevel", 0x0009),
    set("set lightOverrideInactiveLevel", 0x0009),
    get("get sensorDelayTime", 0x000A),
    get("get sensorOverrideDelayTime", 0x000B),
    set("set sensorOverrideDelayTime", 0x000B),
    get("get powerupTime", 0x000C),
    get("get usageActiveTime", 0x000D),
    get("get usageInactiveTime", 0x000E),
    get("get usagePermActiveTime", 0x000F),
    get("get usagePermInactiveTime", 0x0010),
    get("get usageWh", 0x0011),
    get("get usagePerm", 0x0012),
    get("get usageSensorEvents", 0x0013),
    get("get usagePermSensorEvents", 0x0014),
    get("get numberOfLogEntries", 0x0015),
    get("get configCalibrationP0", 0x0016),
    set("set configCalibrationP0", 0x0016),
    get("get configCalibrationP1", 0x0017),
    set("set configCalibrationP1", 0x0017),
    get("get configCalibrationP2", 0x0018),
    set("set configCalibrationP2", 0x0018),
    get("get configCalibrationP3", 0x0019),
    set("set configCalibrationP3", 0x0019),
    get("get buildTime", 0x001A),
    set("set buildTime", 0x001A),
    get("get sensorTimeoutCountdown", 0x001B),
    get("get currentLightLevel", 0x001C),
    get("get safeMode", 0x001D),
    get("get lightBarSelect", 0x001E),
    set("set lightBarSelect", 0x001E),
    get("get currentPowerConsumption", 0x001F),
    get("get wirelessDataAggregator", 0x0020),
    set("set wirelessDataAggregator", 0x0020),
    get("get resetUsageTimestamp", 0x0021),
    get("get pwmPeriodRegister", 0x0022),
    set("set pwmPeriodRegister", 0x0022),
    get("get analogSensorValue", 0x0023),
    get("get analogReportingHysteresis", 0x0024),
    get("get zone", 0x0025),
    set("set zone", 0x0025),
    get("get lightTemporaryActiveLevel", 0x0026),
    set("set lightTemporaryActiveLevel", 0x0026),
    get("get lightTemporaryInactiveLevel", 0x0027),
    set("set lightTemporaryInactiveLevel", 0x0027),
    get("get sensorTemporaryDelayTime", 0x0028),
    set("set sensorTemporaryDelayTime", 0x0028),
    get("get temporaryOverrideTimeout", 0x0029),
    set("set temporaryOverrideTimeout", 0x0029),
    get("get setRemoteState", 0x002A),
    set("set setRemoteState", 0x002A),
    get("get remoteSetDelayTime", 0x002B),
    set("set remoteSetDelayTime", 0x002B),
    get("get remoteSecondsCountdown", 0x002C),
    get("get minimumDimmingValue", 0x002D),
    get("get powerCalibrationA0", 0x002E),
    set("set powerCalibrationA0", 0x002E),
    get("get powerCalibrationB0", 0x002F),
    set("set powerCalibrationB0", 0x002F),
    get("get powerCalibrationC0", 0x0030),
    set("set powerCalibrationC0", 0x0030),
    get("get powerCalibrationMA", 0x0031),
    set("set powerCalibrationMA", 0x0031),
    get("get powerCalibrationMB", 0x0032),
    set("set powerCalibrationMB", 0x0032),
    get("get powerCalibrationMC", 0x0033),
    set("set powerCalibrationMC", 0x0033),
    get("get powerCalibrationPOff", 0x0034),
    set("set powerCalibrationPOff", 0x0034),
    get("get powerCalibrationPOn", 0x0035),
    set("set powerCalibrationPOn", 0x0035),
    get("get powerCalibrationT0", 0x0036),
    set("set powerCalibrationT0", 0x0036),
    get("get powerEstimatorTemperatureOverride", 0x0037),
    set("set powerEstimatorTemperatureOverride", 0x0037),
    get("get cachedTemperatureValue", 0x0038),
    get("get eepromSize", 0x0039),
    get("get hardwareRevision", 0x003A),
    get("get wirelessPanId", 0x003B),
    set("set wirelessPanId", 0x003B),
    get("get wirelessChannelMask", 0x003C),
    set("set wirelessChannelMask", 0x003C),
    get("get wirelessShortAddress", 0x003D),
    set("set wirelessShortAddress", 0x003D),
    get("get wirelessRole", 0x003E),
    set("set wirelessRole", 0x003E),
    get("get wirelessWatchdogHold", 0x003F),
    set("set wirelessWatchdogHold", 0x003F),
    get("get wirelessWatchdogPeriod", 0x0040),
    set("set wirelessWatchdogPeriod", 0x0040),
    get("get firmwareCode", 0x0041),
    get("get moduleFirmwareCode", 0x0042),
    get("get maxTemperatureObserved", 0x0043),
    get("get maxTemperatureObservedTime", 0x0044),
    get("get overTemperatureThresholdLow", 0x0045),
    set("set overTemperatureThresholdLow", 0x0045),
    get("get overTemperatureThresholdHigh", 0x0046),
    set("set overTemperatureThresholdHigh", 0x0046),
    get("get overTemperatureDimmingLimit", 0x0047),
    set("set overTemperatureDimmingLimit", 0x0047),
    get("get analogDimmingMode", 0x0048),
    set("set analogDimmingMode", 0x0048),
    get("get fixtureIdMode", 0x0049),
    set("set fixtureIdMode", 0x0049),
    get("get acFrequency", 0x004A),
    get("get sensorBits", 0x004B),
    get("get powerMeterCommand", 0x004C),
    set("set powerMeterCommand", 0x004C),
    get("get powerMeterRegister", 0x004D),
    set("set powerMeterRegister", 0x004D),
    get("get ambientTemperature", 0x004E),
    get("get lightSensorLevel", 0x004F),
    get("get sensor0Timeout", 0x0050),
    set("set sensor0Timeout", 0x0050),
    get("get sensor0Offset", 0x0051),
    set("set sensor0Offset", 0x0051),
    get("get sensor1Timeout", 0x0052),
    set("set sensor1Timeout", 0x0052),
    get("get sensor1Offset", 0x0053),
    set("set sensor1Offset", 0x0053),
    get("get analogDimmingLowValue", 0x0054),
    set("set analogDimmingLowValue", 0x0054),
    get("get analogDimmingHighValue", 0x0055),
    set("set analogDimmingHighValue", 0x0055),
    get("get analogDimmingOffValue", 0x0056),
    set("set analogDimmingOffValue", 0x0056),
    get("get powerMeasurementMode", 0x0057),
    set("set powerMeasurementMode", 0x0057),
    get("get externalPowerMeter", 0x0058),
    set("set externalPowerMeter", 0x0058),
    get("get ambientSensorValue", 0x0059),
    get("get ambientActiveLevel", 0x005A),
    set("set ambientActiveLevel", 0x005A),
    get("get ambientInactiveLevel", 0x005B),
    set("set ambientInactiveLevel", 0x005B),
    get("get ambientEnvironmentalGain", 0x005C),
    set("set ambientEnvironmentalGain", 0x005C),
    get("get ambientOffHysteresis", 0x005D),
    set("set ambientOffHysteresis", 0x005D),
    get("get ambientOnHysteresis", 0x005E),
    set("set ambientOnHysteresis", 0x005E),
    get("get powerboardProtocol", 0x005F),
    get("get ledOverride", 0x0060),
    set("set ledOverride", 0x0060),
    get("get fadeUpStep", 0x0061),
    set("set fadeUpStep", 0x0061),
    get("get fadeDownStep", 0x0062),
    set("set fadeDownStep", 0x0062),
    get("get maxBrightness", 0x0063),
    set("set maxBrightness", 0x0063),
    get("get i2cResets", 0x0064),
    get("get sensorGuardTime", 0x0065),
    set("set sensorGuardTime", 0x0065),
    get("get inputVoltage", 0x0066),
    get("get inputVoltageCalibration", 0x0067),
    set("set inputVoltageCalibration", 0x0067),
    get("get numberOfLightbars", 0x0068),
    set("set numberOfLightbars", 0x0068),
    get("get ambientDivisor", 0x0069),
    get("get currentLimit", 0x006A),
    set("set currentLimit", 0x006A),
    get("get bootloaderCode", 0x006B),
    get("get xpressMode", 0x006C),
    set("set xpressMode", 0x006C),
    get_decoded("get batteryBackupStatus", 0x006D, decode::battery_backup_status),
    set("set batteryBackupStatus", 0x006D),
    get("get sensorSeconds", 0x006E),
    get("get inputVoltageTwo", 0x006F),
    get("get inputVoltageTwoCalibration", 0x0070),
    set("set inputVoltageTwoCalibration", 0x0070),
    get("get maxRampUpSpeed", 0x0071),
    set("set maxRampUpSpeed", 0x0071),
    get("get maxRampDownSpeed", 0x0072),
    set("set maxRampDownSpeed", 0x0072),
    get("get wirelessNetworkKey", 0x0073),
    set("set wirelessNetworkKey", 0x0073),
    get("get emergencyLightLevel", 0x0074),
    get("get batteryBackupPowerCalibration", 0x0075),
    set("set batteryBackupPowerCalibration", 0x0075),
    get("get motionSensorProfile", 0x0076),
    set("set motionSensorProfile", 0x0076),
    get("get powerMeterLevelAtOff", 0x0077),
    set("set powerMeterLevelAtOff", 0x0077),
    get("get powerMeterLevelAtMin", 0x0078),
    set("set powerMeterLevelAtMin", 0x0078),
    get("get powerMeterLevelAtMax", 0x0079),
    set("set powerMeterLevelAtMax", 0x0079),
    get("get powerMeterType", 0x007A),
    set("set powerMeterType", 0x007A),
    get("get DLAiSlaveMode", 0x007B),
    set("set DLAiSlaveMode", 0x007B),
    get("get DALIBootloadingActive", 0x007C),
    get("get testingMode", 0x007D),
    set("set testingMode", 0x007D),
    get("get numberOfBatteriesSupported", 0x007E),
    set("set numberOfBatteriesSupported", 0x007E),
    // lightbar register commands
    lightbar("get lbProtocolVersion", &[0x00]),
    lightbar("get lbFirmwareCode", &[0x01, 0x02]),
    lightbar_decoded(
        "get lbFirmwareVersion",
        &[0x03, 0x04],
        decode::lightbar_firmware_version,
    ),
    // reset commands
    action("reset usage", "!U"),
    action("reset log", "!L"),
    action("reset newLog", "!K"),
    action("reset eeprom", "!Z"),
    action("reset eepromToDefault", "!C"),
    action("reset eepromToLatestMapVersion", "!E"),
    action("reset network", "!N"),
    action("reset networkWithoutChecking", "!N1"),
    action("reset daliCommissioning", "!Y"),
    action("reset daliPowerMetering", "!A"),
    // reboot commands
    action("reboot pmu", "!R"),
    action("reboot wirelessCard", "!W"),
    action("reboot i2cDevices", "!X"),
    // reload commands
    action("reload dlaFirmware", "!B"),
    action("reload wirelessModuleFirmware", "!M"),
    action("reload powerboardFirmware", "!P"),
    action("reload lightbarFirmware", "!P"),
    action("reload batteryBackupFirmware", "!P"),
    action("reload motionSensorFirmware", "!V"),
];

/// Exact, case-sensitive lookup.
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// All command names, in registry order (drives completion).
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}
