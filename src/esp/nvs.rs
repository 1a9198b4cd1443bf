use anyhow::Result;
use esp_idf_svc::nvs::{EspDefaultNvsPartition, EspNvs, NvsDefault};

use crate::config::{NVS_FLAG_KEY, NVS_NAMESPACE};
use crate::ports::FlagStore;

pub struct NvsFlagStore {
    nvs: EspNvs<NvsDefault>,
}

impl NvsFlagStore {
    pub fn new(partition: EspDefaultNvsPartition) -> Result<Self> {
        let nvs = EspNvs::new(partition, NVS_NAMESPACE, true)?;
        Ok(Self { nvs })
    }
}

impl FlagStore for NvsFlagStore {
    fn read(&mut self) -> Result<Option<u8>> {
        Ok(self.nvs.get_u8(NVS_FLAG_KEY)?)
    }

    // set_u8 commits before returning.
    fn write(&mut self, flag: u8) -> Result<()> {
        self.nvs.set_u8(NVS_FLAG_KEY, flag)?;
        Ok(())
    }
}
