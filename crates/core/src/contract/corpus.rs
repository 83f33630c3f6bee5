use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{BenchError, Result};

/// Kinds of synthetic benchmark contracts, emitted round-robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Overflow,
    Reentrancy,
    AccessControl,
    Safe,
}

impl TemplateKind {
    pub const CYCLE: [TemplateKind; 4] = [
        TemplateKind::Overflow,
        TemplateKind::Reentrancy,
        TemplateKind::AccessControl,
        TemplateKind::Safe,
    ];

    /// Template used for the `index`-th generated contract (0-based).
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    fn render(&self, index: usize, solc_version: &str) -> String {
        match self {
            TemplateKind::Overflow => overflow_contract(index, solc_version),
            TemplateKind::Reentrancy => reentrancy_contract(index, solc_version),
            TemplateKind::AccessControl => access_control_contract(index, solc_version),
            TemplateKind::Safe => safe_contract(index, solc_version),
        }
    }
}

/// Writes template-based Solidity contracts into a benchmark directory.
pub struct CorpusGenerator {
    output_dir: PathBuf,
    solc_version: String,
}

impl CorpusGenerator {
    pub fn new(output_dir: impl Into<PathBuf>, solc_version: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            solc_version: solc_version.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render the `index`-th contract without touching the filesystem.
    pub fn render(&self, index: usize) -> String {
        TemplateKind::for_index(index).render(index, &self.solc_version)
    }

    /// Write `count` contracts as `benchmark_1.sol` .. `benchmark_{count}.sol`.
    /// Existing files with those names are overwritten. Returns how many were written.
    pub fn generate(&self, count: usize) -> Result<usize> {
        fs::create_dir_all(&self.output_dir).map_err(|source| BenchError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        info!(
            count,
            solc_version = %self.solc_version,
            dir = %self.output_dir.display(),
            "generating benchmark contracts"
        );

        let mut written = 0;
        for index in 0..count {
            let path = self.output_dir.join(format!("benchmark_{}.sol", index + 1));
            fs::write(&path, self.render(index)).map_err(|source| BenchError::Write {
                path: path.clone(),
                source,
            })?;
            written += 1;
            if written % 25 == 0 {
                info!("{written}/{count} contracts written");
            }
        }

        info!("generated {written} contracts");
        Ok(written)
    }
}

fn overflow_contract(index: usize, version: &str) -> String {
    format!(
        r#"// SPDX-License-Identifier: MIT
pragma solidity ^{version};

contract OverflowTest{index} {{
    uint256 private value;

    function unsafeAdd(uint256 a) public {{
        unchecked {{
            value += a;  // Potential overflow
        }}
    }}

    function unsafeMul(uint256 a) public {{
        unchecked {{
            value *= a;  // Potential overflow
        }}
    }}

    function getValue() public view returns (uint256) {{
        return value;
    }}
}}"#
    )
}

fn reentrancy_contract(index: usize, version: &str) -> String {
    format!(
        r#"// SPDX-License-Identifier: MIT
pragma solidity ^{version};

contract ReentrancyTest{index} {{
    mapping(address => uint) private balances;

    function deposit() public payable {{
        balances[msg.sender] += msg.value;
    }}

    function withdraw() public {{
        uint balance = balances[msg.sender];
        require(balance > 0, "No balance");

        (bool success, ) = msg.sender.call{{value: balance}}("");
        require(success, "Transfer failed");

        balances[msg.sender] = 0;  // State update after external call
    }}

    function getBalance(address account) public view returns (uint) {{
        return balances[account];
    }}
}}"#
    )
}

fn access_control_contract(index: usize, version: &str) -> String {
    format!(
        r#"// SPDX-License-Identifier: MIT
pragma solidity ^{version};

contract AccessControlTest{index} {{
    uint256 private value;

    function setValue(uint256 newValue) public {{  // Missing access control
        value = newValue;
    }}

    function criticalFunction() public {{  // Missing access control
        selfdestruct(payable(msg.sender));
    }}

    function getValue() public view returns (uint256) {{
        return value;
    }}
}}"#
    )
}

fn safe_contract(index: usize, version: &str) -> String {
    format!(
        r#"// SPDX-License-Identifier: MIT
pragma solidity ^{version};

contract SafeTest{index} {{
    address private owner;
    uint256 private value;

    constructor() {{
        owner = msg.sender;
    }}

    modifier onlyOwner() {{
        require(msg.sender == owner, "Not owner");
        _;
    }}

    function setValue(uint256 newValue) public onlyOwner {{
        value = newValue;
    }}

    function getValue() public view returns (uint256) {{
        return value;
    }}

    function safeAdd(uint256 a) public onlyOwner {{
        value += a;  // Safe due to Solidity 0.8.0+ overflow checks
    }}
}}"#
    )
}
