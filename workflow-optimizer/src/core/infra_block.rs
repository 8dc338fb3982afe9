//! Pure substitution of the infrastructure-loading step.
//!
//! The legacy step read VM name, zone and project id from
//! `.deployment-info/infrastructure.json` via `jq`, falling back to workflow
//! env. Its replacement reads the same values from GitHub Variables only.
//! Matching is byte-exact: any whitespace or emoji drift in the workflow file
//! means the step is left alone.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

/// Legacy step that loads infrastructure info from the deployment-info file.
pub const DEPLOYMENT_INFO_BLOCK: &str = r#"      # Load infrastructure information from deployment files
      - name: 🔍 Load Infrastructure Information
        id: load_info
        run: |
          echo "🔍 Loading infrastructure information..."
          
          # Check if deployment info files exist
          if [ -f ".deployment-info/infrastructure.json" ]; then
            echo "✅ Found deployment information file"
            
            # Extract information from JSON file
            VM_NAME=$(jq -r '.vm_name // ""' .deployment-info/infrastructure.json)
            VM_ZONE=$(jq -r '.vm_zone // ""' .deployment-info/infrastructure.json)
            PROJECT_ID=$(jq -r '.project_id // ""' .deployment-info/infrastructure.json)
            
            # Override environment variables if found in deployment files
            if [ -n "$VM_NAME" ]; then
              echo "VM_INSTANCE=$VM_NAME" >> $GITHUB_ENV
            fi
            if [ -n "$VM_ZONE" ]; then
              echo "VM_ZONE=$VM_ZONE" >> $GITHUB_ENV
            fi
            if [ -n "$PROJECT_ID" ]; then
              echo "GCP_PROJECT_ID=$PROJECT_ID" >> $GITHUB_ENV
            fi
            
            echo "📋 Using deployment files for infrastructure info"
            echo "DEPLOYMENT_FILES_EXIST=true" >> $GITHUB_ENV
          else
            echo "📋 Using GitHub Variables/inputs for infrastructure info"
            echo "DEPLOYMENT_FILES_EXIST=false" >> $GITHUB_ENV
            
            # Use original environment variables
            echo "VM_INSTANCE=${{ env.VM_INSTANCE }}" >> $GITHUB_ENV
            echo "VM_ZONE=${{ env.VM_ZONE }}" >> $GITHUB_ENV
            echo "GCP_PROJECT_ID=${{ env.GCP_PROJECT_ID }}" >> $GITHUB_ENV
          fi
          
          echo "📊 Infrastructure Information:"
          echo "- VM Instance: ${VM_INSTANCE:-Not set}"
          echo "- VM Zone: ${VM_ZONE:-Not set}"
          echo "- Project ID: ${GCP_PROJECT_ID:-Not set}""#;

/// Replacement step that reads infrastructure info from GitHub Variables.
pub const GITHUB_VARIABLES_BLOCK: &str = r#"      # Load infrastructure information from GitHub Variables only
      - name: 🔍 Load Infrastructure Information
        id: load_info
        run: |
          echo "🔍 Loading infrastructure information from GitHub Variables..."
          
          # Use GitHub Variables directly (no file dependencies)
          echo "VM_INSTANCE=${{ env.VM_INSTANCE }}" >> $GITHUB_ENV
          echo "VM_ZONE=${{ env.VM_ZONE }}" >> $GITHUB_ENV
          echo "GCP_PROJECT_ID=${{ env.GCP_PROJECT_ID }}" >> $GITHUB_ENV
          
          echo "📊 Infrastructure Information:"
          echo "- VM Instance: ${{ env.VM_INSTANCE }}"
          echo "- VM Zone: ${{ env.VM_ZONE }}"
          echo "- Project ID: ${{ env.GCP_PROJECT_ID }}"
          echo "📡 Using GitHub Variables for all infrastructure info (no files needed)""#;

/// Compiled matcher for [`DEPLOYMENT_INFO_BLOCK`].
pub fn infra_block_pattern() -> &'static Regex {
    static INFRA_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
        RegexBuilder::new(&regex::escape(DEPLOYMENT_INFO_BLOCK))
            .multi_line(true)
            .build()
            .unwrap()
    });
    &INFRA_BLOCK_RE
}

/// Replace every occurrence of the legacy step with the GitHub Variables step.
///
/// Returns `Cow::Borrowed` when nothing matched, so callers can detect a no-op
/// without comparing strings.
pub fn replace_infra_block(content: &str) -> Cow<'_, str> {
    infra_block_pattern().replace_all(content, NoExpand(GITHUB_VARIABLES_BLOCK))
}

/// Number of legacy steps present in `content`.
pub fn count_infra_blocks(content: &str) -> usize {
    infra_block_pattern().find_iter(content).count()
}
