use evocast::data::{DataValidator, WorldBankConnector};
use std::path::PathBuf;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Root>
  <data>
    <record>
      <field name="Country or Area" key="WLD">World</field>
      <field name="Item" key="SE.PRM.PRSL.ZS">Persistence to last grade of primary</field>
      <field name="Year">1990</field>
      <field name="Value">80.5</field>
    </record>
    <record>
      <field name="Country or Area" key="WLD">World</field>
      <field name="Item" key="SE.PRM.PRSL.ZS">Persistence to last grade of primary</field>
      <field name="Year">1991</field>
      <field name="Value">81.25</field>
    </record>
    <record>
      <field name="Country or Area" key="WLD">World</field>
      <field name="Item" key="SE.PRM.PRSL.ZS">Persistence to last grade of primary</field>
      <field name="Year">1992</field>
      <field name="Value"></field>
    </record>
    <record>
      <field name="Country or Area" key="WLD">World</field>
      <field name="Item" key="SE.PRM.PRSL.ZS">Persistence to last grade of primary</field>
      <field name="Year">1993</field>
      <field name="Value">82.75</field>
    </record>
  </data>
</Root>"#;

fn write_sample(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn test_load_from_file() {
    let path = write_sample("evocast_data_test.xml");

    let df = WorldBankConnector::load(&path, "WLD").unwrap();
    assert_eq!(df.height(), 3);

    let metadata = WorldBankConnector::create_metadata(&path, "WLD", &df).unwrap();
    assert_eq!(metadata.num_points, 3);
    assert_eq!(metadata.year_range, (1990, 1993));

    let series = WorldBankConnector::to_time_series(&df).unwrap();
    assert_eq!(series.years, vec![1990, 1991, 1993]);
    assert_eq!(series.values, vec![80.5, 81.25, 82.75]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_validation_after_load() {
    let path = write_sample("evocast_data_validate.xml");

    let df = WorldBankConnector::load(&path, "WLD").unwrap();
    assert!(DataValidator::validate_series(&df, 3).is_ok());
    assert!(DataValidator::validate_series(&df, 10).is_err());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_is_an_error() {
    let result = WorldBankConnector::load("/nonexistent/evocast.xml", "WLD");
    assert!(result.is_err());
}

#[test]
fn test_unknown_region_is_an_error() {
    let path = write_sample("evocast_data_region.xml");

    let result = WorldBankConnector::load(&path, "BEN");
    assert!(result.is_err());

    std::fs::remove_file(&path).unwrap();
}
