use crate::util::types::PartitionId;

//Responsible for all fixture filename conversions.
//Names are fixed by the test harness that consumes the scripts, so they
// are not configurable.
pub fn tree() -> String {
    String::from("splitTree")
}
pub fn read_script(partition: PartitionId) -> String {
    format!("read{}", partition + 1)
}
pub fn write_script(partition: PartitionId) -> String {
    format!("write{}", partition + 1)
}
pub fn manifest() -> String {
    String::from("manifest.bin")
}
