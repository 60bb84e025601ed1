//! `pom.xml` generation
//!
//! The emitted pom is a fixed template: the dependency list is not
//! derived from the project, it is the hardcoded trio (jstl,
//! servlet-api, mysql-connector) every converted project gets. Jars
//! whose names are not recognized get a commented-out TODO marker so
//! the Maven mapping can be filled in by hand.

/// Lowercase substrings that mark a jar as already covered by the
/// fixed dependency list.
const KNOWN_JAR_MARKERS: [&str; 3] = ["servlet", "jstl", "mysql"];

/// The three dependency blocks every generated pom contains.
const FIXED_DEPENDENCIES: &str = r#"
        <dependency>
            <groupId>javax.servlet</groupId>
            <artifactId>jstl</artifactId>
            <version>1.2</version>
        </dependency>
        <dependency>
            <groupId>javax.servlet</groupId>
            <artifactId>javax.servlet-api</artifactId>
            <version>4.0.1</version>
            <scope>provided</scope>
        </dependency>
        <dependency>
            <groupId>mysql</groupId>
            <artifactId>mysql-connector-java</artifactId>
            <version>8.0.33</version>
        </dependency>"#;

/// Render the full `pom.xml` contents for a converted project.
///
/// One `<!-- TODO -->` comment is appended per jar whose lowercase
/// name contains none of the known markers, in the order given.
pub fn render_pom(jars: &[String]) -> String {
    let mut deps = String::from(FIXED_DEPENDENCIES);
    for jar in jars {
        let lower = jar.to_lowercase();
        if !KNOWN_JAR_MARKERS.iter().any(|marker| lower.contains(marker)) {
            deps.push_str("\n        <!-- TODO: Manually add mapping for ");
            deps.push_str(jar);
            deps.push_str(" -->");
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <groupId>com.example</groupId>
    <artifactId>converted-project</artifactId>
    <version>1.0-SNAPSHOT</version>
    <packaging>war</packaging>
    <dependencies>{deps}
    </dependencies>
    <build>
        <plugins>
            <plugin>
                <groupId>org.apache.maven.plugins</groupId>
                <artifactId>maven-compiler-plugin</artifactId>
                <version>3.11.0</version>
                <configuration>
                    <release>11</release>
                </configuration>
            </plugin>
            <plugin>
                <groupId>org.apache.maven.plugins</groupId>
                <artifactId>maven-war-plugin</artifactId>
                <version>3.3.2</version>
                <configuration>
                    <failOnMissingWebXml>false</failOnMissingWebXml>
                </configuration>
            </plugin>
        </plugins>
    </build>
</project>
"#
    )
}
