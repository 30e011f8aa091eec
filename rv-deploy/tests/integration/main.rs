mod cluster_test;
mod decorators_test;
mod factory_test;

use rstest::*;
use rv_core::config::Config;
use rv_core::prelude::*;
use rv_testutils::*;

use rv_deploy::cluster::ClusterSpecification;
use rv_deploy::options;
use rv_deploy::parameters::JobManagerParameters;
